// crates/strip_think_blocks/src/lib.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use think_marker::{THINK_CLOSE, THINK_OPEN};

// Non-greedy so each opening marker pairs with the nearest closing marker
// that follows it; `(?s)` lets a block span line boundaries.
static THINK_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(THINK_OPEN),
        regex::escape(THINK_CLOSE)
    ))
    .unwrap()
});

/// Removes every `<think>…</think>` block from the raw model output and trims
/// surrounding whitespace from what remains.
///
/// Blocks are matched leftmost-first: each `<think>` is paired with the first
/// `</think>` after it, so adjacent blocks are removed independently. An
/// opening marker with no closing marker after it is left untouched, as is a
/// closing marker that no opening marker precedes. The text around removed
/// blocks is joined with no separator inserted.
pub fn strip_think_blocks(llm_output: &str) -> String {
    THINK_BLOCK_RE.replace_all(llm_output, "").trim().to_string()
}

/// Reads the given file and returns its content with `<think>` blocks
/// removed and surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn strip_think_blocks_from_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path_ref = file_path.as_ref();
    let content = fs::read_to_string(file_path_ref)
        .with_context(|| format!("Error reading file {}", file_path_ref.display()))?;
    Ok(strip_think_blocks(&content))
}

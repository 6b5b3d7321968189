// crates/think_marker/src/lib.rs

//! Canonical reasoning-block marker literals shared across the
//! output-cleaning tool-chain.

/// Opening marker a model emits at the start of a reasoning block.
pub const THINK_OPEN: &str = "<think>";

/// Closing marker that ends a reasoning block.
pub const THINK_CLOSE: &str = "</think>";

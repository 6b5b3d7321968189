use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::io::{self, Read};

use strip_think_blocks::{strip_think_blocks, strip_think_blocks_from_file};

fn main() -> Result<()> {
    let matches = Command::new("clean_model_output")
        .version("0.1.0")
        .about("Strips <think> reasoning blocks from raw model output")
        .arg(
            Arg::new("input")
                .help("File containing the raw model output; reads stdin when omitted")
                .num_args(1),
        )
        .get_matches();

    let cleaned = match matches.get_one::<String>("input") {
        Some(path) => strip_think_blocks_from_file(path)?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Error reading standard input")?;
            strip_think_blocks(&raw)
        }
    };

    println!("{}", cleaned);
    Ok(())
}

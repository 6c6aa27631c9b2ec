//! Command-line interface for the AMPL-2023 front-end.
//!
//! `amplc <source-file>` exits 0 if the program is well-formed and
//! prints a single `<file>:<line>:<col>: <message>` diagnostic to
//! stderr (exiting 1) otherwise.

use amplc::frontend;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "amplc")]
#[command(version)]
#[command(about = "A compiler front-end for the AMPL-2023 language")]
struct Cli {
    /// AMPL-2023 source file
    source: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.source).map_err(|err| {
        anyhow!("file '{}' could not be opened: {}", cli.source.display(), err)
    })?;

    let source_name = cli.source.display().to_string();
    frontend::check(&source).map_err(|err| anyhow!(err.render(&source_name)))?;

    Ok(())
}

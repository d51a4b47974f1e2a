//! # gitclone CLI
//!
//! This is the binary entry point for the `gitclone` command-line tool.
//!
//! It parses the command line with `clap` and hands off to [`cli::Cli`]. All
//! clone, detection and install logic lives in the `gitclone` library crate.
//! Any error reaching `main` is reported on stderr and ends the process with
//! exit code 1.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

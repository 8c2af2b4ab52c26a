//! Solclone - solution bundle duplicator
//!
//! Copies an unpacked low-code solution bundle to a new location and renames
//! every internal identifier (unique name, connection references, environment
//! variables) so the copy can be imported next to the original.

use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod error;
mod operations;
mod solution;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Missing options are an early return, not a parse error: print the
    // help text and exit cleanly, the same way `-h` does.
    let Some(options) = cli.into_options() else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = commands::duplicate::run(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

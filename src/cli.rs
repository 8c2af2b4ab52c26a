//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::operations::duplicate::DuplicateOptions;

/// Solclone - solution bundle duplicator
///
/// Duplicate an unpacked solution bundle under a new unique name.
#[derive(Parser, Debug)]
#[command(
    name = "solclone",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Duplicate a solution bundle under a new unique name",
    long_about = "Solclone copies an unpacked solution bundle to a new location and rewrites \
                  its unique name, connection references and environment variable definitions \
                  so the copy can be imported without colliding with the original.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  solclone -n MySolutionCopy -s ./solution -d ./solution_copy\n    \
                  solclone --name Staging --source ./prod_solution --dest ./staging_solution"
)]
pub struct Cli {
    /// Unique name for the duplicated solution
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Source directory holding the unpacked solution
    #[arg(long, short = 's')]
    pub source: Option<PathBuf>,

    /// Destination directory for the duplicate (replaced if it exists)
    #[arg(long, short = 'd')]
    pub dest: Option<PathBuf>,
}

impl Cli {
    /// All three options are needed to do any work; `None` means usage
    /// should be printed instead of running the pipeline.
    pub fn into_options(self) -> Option<DuplicateOptions> {
        Some(DuplicateOptions {
            name: self.name?,
            source: self.source?,
            dest: self.dest?,
        })
    }
}

//! Command-line argument definitions for the dotnote CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the kind of output,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the dotnote tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input notation file
    #[arg(default_value = "-", help = "Input file path, or - for stdin")]
    pub input: String,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the canonical form of the notation instead of the layout JSON
    #[arg(long, default_value_t = false)]
    pub canonical: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

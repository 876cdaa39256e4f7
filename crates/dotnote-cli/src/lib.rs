//! CLI logic for the dotnote tool.
//!
//! This module contains the core CLI logic: read notation, run it through
//! the library, and write the layout JSON or the canonical notation.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use dotnote::{DotNoteError, DotNotation, export};

/// Run the dotnote CLI application
///
/// This function reads notation from the input file (or stdin), processes it
/// through the dotnote pipeline and writes the result to the output file (or
/// stdout).
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DotNoteError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Lexical and syntax errors
/// - Layout errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), DotNoteError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        canonical = args.canonical;
        "Processing notation"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input
    let source = read_source(&args.input)?;

    // Process notation using the DotNotation API
    let notation = DotNotation::new(app_config);
    let output = if args.canonical {
        notation.canonicalize(&source)?
    } else {
        let layout = notation.layout(&source)?;
        export::to_json(&layout)?
    };

    // Write output
    write_output(args.output.as_deref(), &output)?;

    info!(output_path:? = args.output; "Output written successfully");

    Ok(())
}

fn read_source(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(path: Option<&str>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{content}\n")),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()
        }
    }
}

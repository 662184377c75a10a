//! # Generacion CLI Module
//!
//! This module implements the console interface.
//!
//! There are no subcommands. A run prompts for an age, reads one line and
//! prints the result of each classification strategy in turn.

mod commands;

use clap::Parser;
use generacion_core::{ClassificationReport, GeneracionError};
use std::io::{self, BufRead, Write};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Generacion - generational cohort classifier
///
/// Asks for your age and tells you which generation you belong to,
/// classified three different ways.
#[derive(Parser, Debug)]
#[command(name = "generacion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute one run against the process's stdin and stdout.
///
/// User-facing error messages are printed here; the caller only decides
/// the exit status.
pub fn execute() -> Result<(), GeneracionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = run(&mut stdin.lock(), &mut stdout.lock());

    match result {
        Ok(_) => Ok(()),
        // Already reported on stdout by `run`.
        Err(err @ GeneracionError::NegativeAge(_)) => Err(err),
        Err(err) => {
            eprintln!("Error: {}", err);
            Err(err)
        }
    }
}

/// Execute one run against arbitrary input and output streams.
///
/// A negative age prints its error message to `output` before returning,
/// so the transcript matches what the user sees on the console.
pub fn run<R, W>(input: &mut R, output: &mut W) -> Result<ClassificationReport, GeneracionError>
where
    R: BufRead,
    W: Write,
{
    match cmd_classify(input, output) {
        Err(err @ GeneracionError::NegativeAge(_)) => {
            tracing::info!("Rejected negative age");
            writeln!(output, "Error: {}", err)?;
            output.flush()?;
            Err(err)
        }
        other => other,
    }
}

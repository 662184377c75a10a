//! # Generacion - Generational Cohort Classifier
//!
//! Asks for an age, derives the birth year and prints the generation it
//! belongs to, once per classification strategy.
//!
//! ## Usage
//!
//! ```bash
//! generacion
//! Por favor, ingresa tu edad: 30
//!
//! === Usando estructura IF ===
//! Perteneces a las Generaciones Z y Alpha
//! ...
//! ```
//!
//! ## Logging
//!
//! Logs go to stderr so stdout stays a clean transcript.
//! - `RUST_LOG`: tracing filter (default `generacion=warn`, or
//!   `generacion=debug` with `--verbose`)
//! - `GENERACION_LOG_FORMAT=json`: machine-parseable log lines

use clap::Parser;
use generacion::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = cli::execute() {
        tracing::debug!("Run aborted: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr.
fn init_tracing(verbose: bool) {
    let log_format =
        std::env::var("GENERACION_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "generacion=debug"
    } else {
        "generacion=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

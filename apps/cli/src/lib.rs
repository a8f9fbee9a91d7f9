//! # ean-cli
//!
//! Command line front end for EAN-13 Forge.
//!
//! ## Module Organization
//! ```text
//! ean_cli/
//! ├── lib.rs          ◄─── You are here (logging, config, run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── EAN13_* environment configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── form.rs     ◄─── Generator form state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── generate.rs ◄─── The generate flow
//! ├── clipboard.rs    ◄─── OSC 52 clipboard sink
//! ├── output.rs       ◄─── Text / JSON rendering
//! └── error.rs        ◄─── App error type
//! ```

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod state;

use std::io;
use std::process::ExitCode;

use ean_core::ClipboardSink;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::clipboard::{DisabledSink, Osc52Sink};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::output::{render_error, OutputFormat};

/// Runs the command line application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG or --verbose)                  │
/// │  2. Load EAN13_* configuration                                          │
/// │  3. Merge flags over configuration                                      │
/// │  4. Pick clipboard sink (OSC 52 on stderr, or disabled)                 │
/// │  5. Generate, print, copy                                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> ExitCode {
    init_tracing(cli.verbose);

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let format = cli.format.unwrap_or_default();
            return fail(&AppError::from(e), format);
        }
    };
    debug!(?config, "configuration loaded");

    let args = cli.into_generate_args(&config);
    let format = args.format;

    let mut sink: Box<dyn ClipboardSink> = if config.clipboard_enabled {
        Box::new(Osc52Sink::new(io::stderr()))
    } else {
        Box::new(DisabledSink)
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match commands::generate::execute(&args, stdin.lock(), &mut stdout, sink.as_mut()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e, format),
    }
}

fn fail(err: &AppError, format: OutputFormat) -> ExitCode {
    debug!(code = ?err.code, "run failed");
    eprintln!("{}", render_error(err, format));
    ExitCode::FAILURE
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--verbose` - debug for everything
/// - `RUST_LOG=ean_cli=debug` - fine-grained control
/// - Default: warnings only, so stdout stays clean for pipes
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

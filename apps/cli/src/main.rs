//! # ean13
//!
//! ```text
//! $ printf '2112345000001\n2154321000000-Pears\n' | ean13 --weight 750
//! 2112345007502
//! 2154321007502-Pears
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use clap::Parser;
use ean_cli::cli::Cli;

fn main() -> ExitCode {
    ean_cli::run(Cli::parse())
}

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, ValueEnum};
use ean_core::LabelPolicy;

use crate::commands::generate::GenerateArgs;
use crate::config::AppConfig;
use crate::output::OutputFormat;

/// Append EAN-13 check digits to in-store `21` barcodes, optionally
/// writing a weight into each code first.
#[derive(Parser, Debug)]
#[command(name = "ean13")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Barcode lines: `21` + 10 digits, an optional old check digit, optionally `-label`.
    /// Read from standard input when none are given.
    #[arg(value_name = "CODES")]
    pub codes: Vec<String>,

    /// Weight to write into every code (up to 5 digits, e.g. grams)
    #[arg(short, long, env = "EAN13_WEIGHT")]
    pub weight: Option<String>,

    /// What to do with line labels [default: from EAN13_LABEL_POLICY, else append]
    #[arg(long, value_enum)]
    pub label_policy: Option<LabelPolicyArg>,

    /// Output format [default: from EAN13_OUTPUT_FORMAT, else text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Copy the code at this 0-based position to the clipboard
    #[arg(long, value_name = "INDEX", conflicts_with = "copy_all")]
    pub copy: Option<usize>,

    /// Copy all codes, one per line, to the clipboard
    #[arg(long)]
    pub copy_all: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Label policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelPolicyArg {
    /// Keep the label after the check digit
    Append,
    /// Discard the label
    Drop,
}

impl From<LabelPolicyArg> for LabelPolicy {
    fn from(arg: LabelPolicyArg) -> Self {
        match arg {
            LabelPolicyArg::Append => LabelPolicy::Append,
            LabelPolicyArg::Drop => LabelPolicy::Drop,
        }
    }
}

impl Cli {
    /// Merges flags over the loaded configuration.
    pub fn into_generate_args(self, config: &AppConfig) -> GenerateArgs {
        GenerateArgs {
            codes: self.codes,
            weight: self.weight.unwrap_or_default(),
            label_policy: self
                .label_policy
                .map(LabelPolicy::from)
                .unwrap_or(config.label_policy),
            format: self.format.unwrap_or(config.output_format),
            copy: self.copy,
            copy_all: self.copy_all,
        }
    }
}

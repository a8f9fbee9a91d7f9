//! # Generate Command
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ean13 generate flow                                  │
//! │                                                                         │
//! │  CODES args? ── yes ──► join with "\n"                                  │
//! │      │ no                                                               │
//! │      ▼                                                                  │
//! │  read stdin to end                                                      │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  FormState::set_weight ── Err ──► "Weight should not exceed 5 digits." │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  FormState::generate ──── Err ──► "Invalid barcode: ..."               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  render_codes ──► stdout                                                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  --copy N / --copy-all ──► ClipboardSink                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{Read, Write};
use std::time::Instant;

use ean_core::{ClipboardSink, CoreError, GeneratedCode, LabelPolicy};
use tracing::{debug, info};

use crate::error::AppError;
use crate::output::{render_codes, OutputFormat};
use crate::state::FormState;

/// Fully resolved arguments for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Barcode lines; empty means read from input
    pub codes: Vec<String>,
    /// Raw weight field, `""` for none
    pub weight: String,
    pub label_policy: LabelPolicy,
    pub format: OutputFormat,
    /// Copy one code by 0-based position
    pub copy: Option<usize>,
    /// Copy all codes newline-joined
    pub copy_all: bool,
}

/// Runs the generator and returns the codes it printed.
pub fn execute<R, W, S>(
    args: &GenerateArgs,
    input: R,
    out: &mut W,
    sink: &mut S,
) -> Result<Vec<GeneratedCode>, AppError>
where
    R: Read,
    W: Write,
    S: ClipboardSink + ?Sized,
{
    let start = Instant::now();

    let text = if args.codes.is_empty() {
        debug!("no CODES given, reading standard input");
        read_all(input)?
    } else {
        args.codes.join("\n")
    };

    let mut form = FormState::new(args.label_policy);
    form.set_weight(&args.weight).map_err(CoreError::from)?;
    form.set_barcode_list(text);

    let count = form.generate()?.len();

    info!(
        count,
        weight = form.weight_input(),
        input_bytes = form.barcode_list().len(),
        duration_us = start.elapsed().as_micros() as u64,
        "codes generated"
    );

    if !form.generated_codes().is_empty() || args.format == OutputFormat::Json {
        writeln!(out, "{}", render_codes(form.generated_codes(), args.format)?)?;
    }

    if let Some(index) = args.copy {
        form.copy_code(index, sink)?;
        debug!(index, "copied one code");
    } else if args.copy_all {
        form.copy_all(sink);
        debug!(count, "copied all codes");
    }

    Ok(form.generated_codes().to_vec())
}

fn read_all<R: Read>(mut input: R) -> Result<String, AppError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}

//! # Output Rendering
//!
//! Turns results and errors into the text written to stdout / stderr.
//!
//! ```text
//!   text:  2112345000008            json:  {"codes":["2112345000008",
//!          2112345000008-Apples              "2112345000008-Apples"]}
//! ```

use clap::ValueEnum;
use ean_core::sink::join_codes;
use ean_core::GeneratedCode;
use serde::Serialize;

use crate::error::AppError;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One code per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Serialize)]
struct CodesPayload {
    codes: Vec<String>,
}

/// Renders generated codes, without a trailing newline.
pub fn render_codes(codes: &[GeneratedCode], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(join_codes(codes)),
        OutputFormat::Json => {
            let payload = CodesPayload {
                codes: codes.iter().map(ToString::to_string).collect(),
            };
            serde_json::to_string(&payload).map_err(|e| AppError::internal(e.to_string()))
        }
    }
}

/// Renders an error for stderr.
///
/// Text mode prints only the human message; JSON mode prints
/// `{"code": ..., "message": ...}`.
pub fn render_error(err: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.message.clone(),
        OutputFormat::Json => {
            serde_json::to_string(err).unwrap_or_else(|_| err.message.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use ean_core::process_text;

    #[test]
    fn test_render_text() {
        let codes = process_text("2112345000001\n2112345000001-Apples", "").unwrap();
        assert_eq!(
            render_codes(&codes, OutputFormat::Text).unwrap(),
            "2112345000008\n2112345000008-Apples"
        );
    }

    #[test]
    fn test_render_json() {
        let codes = process_text("2112345000001", "").unwrap();
        assert_eq!(
            render_codes(&codes, OutputFormat::Json).unwrap(),
            r#"{"codes":["2112345000008"]}"#
        );
        assert_eq!(
            render_codes(&[], OutputFormat::Json).unwrap(),
            r#"{"codes":[]}"#
        );
    }

    #[test]
    fn test_render_error() {
        let err = AppError::new(ErrorCode::ValidationError, "Weight should not exceed 5 digits.");
        assert_eq!(
            render_error(&err, OutputFormat::Text),
            "Weight should not exceed 5 digits."
        );
        assert_eq!(
            render_error(&err, OutputFormat::Json),
            r#"{"code":"VALIDATION_ERROR","message":"Weight should not exceed 5 digits."}"#
        );
    }
}

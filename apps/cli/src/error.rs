//! # App Error Type
//!
//! Unified error type for the command line front end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ean13                                  │
//! │                                                                         │
//! │  ean-core                     ean-cli                     terminal      │
//! │  ────────                     ───────                     ────────      │
//! │  ValidationError ─► CoreError ─┐                                        │
//! │  ConfigError ──────────────────┼─► AppError ─► render_error ─► stderr   │
//! │  std::io::Error ───────────────┤                              exit 1    │
//! │  CopyError ────────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both a machine-readable `code` and the human-readable `message` are kept;
//! `--format json` prints both, text mode prints only the message.

use serde::Serialize;

use ean_core::CoreError;

use crate::config::ConfigError;
use crate::state::CopyError;

/// Error surfaced to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Weight should not exceed 5 digits."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A barcode line or the weight was rejected
    ValidationError,

    /// Environment configuration is invalid
    ConfigError,

    /// Reading input or writing output failed
    IoError,

    /// A copy request could not be served
    ClipboardError,

    /// Unexpected failure
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Core errors keep their message word for word.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        if let CoreError::InvalidLine { line_number, .. } = &err {
            tracing::debug!(line_number, "batch rejected");
        }
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<CopyError> for AppError {
    fn from(err: CopyError) -> Self {
        AppError::new(ErrorCode::ClipboardError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failed: {}", err);
        AppError::new(ErrorCode::IoError, format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

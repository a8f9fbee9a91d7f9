//! # Error Types
//!
//! Domain-specific error types for ean-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ean-core errors (this file)                                           │
//! │  ├── ValidationError  - A line or weight was rejected                  │
//! │  └── CoreError        - A batch run failed                             │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── AppError         - What the user sees (text or JSON)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in every variant
//! 3. Display text is the end-user message, word for word

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are terminal for a batch attempt: the caller fixes the input and
/// resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A line does not match `21` + 10 digits + optional `-label`.
    #[error(
        "Invalid barcode: {line}. Barcode must start with '21' followed by exactly 10 digits \
         and optionally a product name separated by a dash."
    )]
    InvalidBarcode { line: String },

    /// Weight is longer than 5 characters or is not all digits.
    #[error("Weight should not exceed 5 digits.")]
    WeightTooLong { value: String },

    /// A body was built directly from a malformed string.
    #[error("Invalid barcode body '{value}': {reason}")]
    InvalidBody { value: String, reason: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Batch pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A line in the batch failed validation; nothing was generated.
    ///
    /// `line_number` is 1-based and counts only the non-blank lines.
    #[error("{source}")]
    InvalidLine {
        line_number: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error outside of a line (the weight input).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            CoreError::InvalidLine { source, .. } => source,
            CoreError::Validation(e) => e,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

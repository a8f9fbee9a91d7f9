//! # Validation Module
//!
//! Input validation for barcode lines and the weight field.
//!
//! ## Accepted Line Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Line Grammar                                       │
//! │                                                                         │
//! │   line   := "21" digit{10} [ digit ] [ "-" label ]                     │
//! │   label  := one or more characters, no CR / LF                         │
//! │                                                                         │
//! │   The optional 13th digit is an old check digit; it is dropped and     │
//! │   recomputed.                                                           │
//! │                                                                         │
//! │   "211234500000"           ✅ body only                                 │
//! │   "2112345000001"          ✅ body + stale check digit                  │
//! │   "2112345000001-Apples"   ✅ body + stale check digit + label          │
//! │   "211234500000-Apples"    ✅ body + label                              │
//! │   "21123450000012"         ❌ more than 13 digits                       │
//! │   "2112345000001-"         ❌ empty label                               │
//! │   "2112345000001 Apples"   ❌ label without dash                        │
//! │   "123456789012"           ❌ missing 21 prefix                         │
//! │   " 2112345000001"         ❌ lines are not trimmed                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ean_core::validation::{validate_line, validate_weight};
//!
//! let parsed = validate_line("2112345000001-Apples").unwrap();
//! assert_eq!(parsed.body.as_str(), "211234500000");
//! assert_eq!(parsed.label.as_deref(), Some("Apples"));
//!
//! assert!(validate_weight("123456").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{BarcodeBody, ParsedLine, Weight};
use crate::{BODY_LEN, BODY_PREFIX, LABEL_SEPARATOR, WEIGHT_FIELD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Batch Splitting
// =============================================================================

/// Splits a text block into candidate lines, dropping blank ones.
///
/// A `\r\n` terminator counts as one line break. Order is preserved.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

// =============================================================================
// Line Validator
// =============================================================================

/// Validates one barcode line and splits off its label.
///
/// ## Rules
/// - First 12 characters: ASCII digits starting with `21`
/// - An optional 13th digit, discarded (the check digit is recomputed)
/// - Then either nothing, or `-` followed by at least one character
/// - The line is checked exactly as given, surrounding spaces included
///
/// Every failure is [`ValidationError::InvalidBarcode`] naming the whole line.
pub fn validate_line(line: &str) -> ValidationResult<ParsedLine> {
    let invalid = || ValidationError::InvalidBarcode {
        line: line.to_string(),
    };

    let bytes = line.as_bytes();
    if bytes.len() < BODY_LEN || !bytes[..BODY_LEN].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    // The first 12 bytes are ASCII, so 12 is a char boundary.
    let (digits, rest) = line.split_at(BODY_LEN);
    if !digits.starts_with(BODY_PREFIX) {
        return Err(invalid());
    }

    let rest = match rest.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => &rest[1..],
        _ => rest,
    };

    let label = if rest.is_empty() {
        None
    } else {
        let label = rest.strip_prefix(LABEL_SEPARATOR).ok_or_else(invalid)?;
        if label.is_empty() || label.contains(['\n', '\r']) {
            return Err(invalid());
        }
        Some(label.to_string())
    };

    let body = BarcodeBody::parse(digits).map_err(|_| invalid())?;

    Ok(ParsedLine { body, label })
}

// =============================================================================
// Weight Validator
// =============================================================================

/// Accepts the weight field.
///
/// ## Rules
/// - `""` means no weight
/// - 1 to 5 ASCII digits are accepted as typed (padding happens later)
/// - Anything else is [`ValidationError::WeightTooLong`]
///
/// ## Example
/// ```rust
/// use ean_core::validation::validate_weight;
///
/// assert_eq!(validate_weight("").unwrap(), None);
/// assert_eq!(validate_weight("12345").unwrap().unwrap().as_str(), "12345");
/// assert!(validate_weight("12a").is_err());
/// ```
pub fn validate_weight(input: &str) -> ValidationResult<Option<Weight>> {
    if input.is_empty() {
        return Ok(None);
    }

    if input.len() > WEIGHT_FIELD_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::WeightTooLong {
            value: input.to_string(),
        });
    }

    Ok(Some(Weight::from_digits(input.to_string())))
}

// =============================================================================
// Unit Tests
// =============================================================================

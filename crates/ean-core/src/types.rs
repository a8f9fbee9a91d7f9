//! # Domain Types
//!
//! Core domain types used throughout EAN-13 Forge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   raw line: "2112345000001-Apples"                                      │
//! │                  │                                                      │
//! │                  ▼ validate_line()                                      │
//! │  ┌─────────────────────────────────────┐   ┌─────────────────┐         │
//! │  │ ParsedLine                          │   │     Weight      │         │
//! │  │  body:  BarcodeBody "211234500000"  │   │  1-5 digits     │         │
//! │  │  label: Some("Apples")              │   │  "750"          │         │
//! │  └──────────────────┬──────────────────┘   └────────┬────────┘         │
//! │                     │                               │                   │
//! │                     ▼ encode_weight() ◄─────────────┘                   │
//! │  ┌─────────────────────────────────────┐                               │
//! │  │ GeneratedCode                       │                               │
//! │  │  body:        "211234500750"        │                               │
//! │  │  check_digit: 0..=9                 │                               │
//! │  │  label:       Some("Apples")        │                               │
//! │  └─────────────────────────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Body Layout
//! ```text
//!   2 1 │ 1 2 3 4 5 │ 0 0 7 5 0 │ C
//!  prefix  product     variable   check
//!   0..2    2..7        7..12      13th
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::{BODY_LEN, BODY_PREFIX, LABEL_SEPARATOR, PRODUCT_NUMBER_LEN, WEIGHT_FIELD_LEN};

// =============================================================================
// Barcode Body
// =============================================================================

/// The 12 data digits of a variable-measure EAN-13 code.
///
/// ## Invariant
/// Exactly 12 ASCII digits, starting with `21`. Every constructor checks it,
/// so any `BarcodeBody` in hand is safe to feed to the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TS)]
#[ts(export, type = "string")]
pub struct BarcodeBody(String);

impl BarcodeBody {
    /// Parses a body from exactly 12 characters.
    ///
    /// ## Example
    /// ```rust
    /// use ean_core::BarcodeBody;
    ///
    /// let body = BarcodeBody::parse("211234500000").unwrap();
    /// assert_eq!(body.product_number(), "12345");
    /// assert!(BarcodeBody::parse("123456789012").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidBody {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.len() != BODY_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must be exactly 12 digits"));
        }

        if !value.starts_with(BODY_PREFIX) {
            return Err(invalid("must start with '21'"));
        }

        Ok(BarcodeBody(value.to_string()))
    }

    /// Builds a body from its two fields.
    ///
    /// Callers guarantee both fields are ASCII digits of the right width.
    pub(crate) fn from_fields(product_number: &str, variable: &str) -> Self {
        debug_assert_eq!(product_number.len(), PRODUCT_NUMBER_LEN);
        debug_assert_eq!(variable.len(), WEIGHT_FIELD_LEN);
        BarcodeBody(format!("{}{}{}", BODY_PREFIX, product_number, variable))
    }

    /// All 12 digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 5-digit product number (positions 2..7).
    #[inline]
    pub fn product_number(&self) -> &str {
        let start = BODY_PREFIX.len();
        &self.0[start..start + PRODUCT_NUMBER_LEN]
    }

    /// The 5-digit variable field (positions 7..12), normally a weight.
    #[inline]
    pub fn variable_field(&self) -> &str {
        &self.0[BODY_LEN - WEIGHT_FIELD_LEN..]
    }

    /// Numeric value of each digit, left to right.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }
}

impl fmt::Display for BarcodeBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Serialized as the bare digit string. Deserializing goes through `parse`.
impl Serialize for BarcodeBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BarcodeBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        BarcodeBody::parse(&value).map_err(de::Error::custom)
    }
}

// =============================================================================
// Parsed Line
// =============================================================================

/// A validated input line: the body plus an optional free-form label.
///
/// The label never takes part in checksum arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub body: BarcodeBody,
    /// Text after the first `-`, without the dash.
    pub label: Option<String>,
}

impl ParsedLine {
    /// The 5-digit product number of the body.
    #[inline]
    pub fn product_number(&self) -> &str {
        self.body.product_number()
    }
}

// =============================================================================
// Weight
// =============================================================================

/// A weight of 1 to 5 decimal digits, e.g. grams.
///
/// Built through [`crate::validation::validate_weight`], which maps the empty
/// input to "no weight".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Weight(String);

impl Weight {
    /// Caller guarantees 1..=5 ASCII digits.
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(!digits.is_empty() && digits.len() <= WEIGHT_FIELD_LEN);
        Weight(digits)
    }

    /// The weight as typed, without padding.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The weight left-padded with zeros to the field width.
    ///
    /// ## Example
    /// ```rust
    /// use ean_core::validation::validate_weight;
    ///
    /// let weight = validate_weight("0").unwrap().unwrap();
    /// assert_eq!(weight.padded(), "00000");
    /// ```
    pub fn padded(&self) -> String {
        crate::weight::zero_pad(&self.0, WEIGHT_FIELD_LEN)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Label Policy
// =============================================================================

/// What happens to a line's label in the generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Reattach the label after the check digit: `2112345000008-Apples`.
    #[default]
    Append,
    /// Drop the label: `2112345000008`.
    Drop,
}

// =============================================================================
// Generated Code
// =============================================================================

/// A finished code: body, check digit and an optional trailing label.
///
/// ## Rendering
/// `Display` gives the final string. The first 13 characters are always the
/// scannable EAN-13; a kept label follows as `-label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    body: BarcodeBody,
    check_digit: u8,
    label: Option<String>,
}

impl GeneratedCode {
    pub(crate) fn new(body: BarcodeBody, check_digit: u8, label: Option<String>) -> Self {
        debug_assert!(check_digit <= 9);
        GeneratedCode {
            body,
            check_digit,
            label,
        }
    }

    /// The 12 data digits.
    #[inline]
    pub fn body(&self) -> &BarcodeBody {
        &self.body
    }

    /// The 13th digit.
    #[inline]
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The label carried over from the input line, if kept.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The 13-digit EAN-13 code without any label.
    pub fn ean13(&self) -> String {
        format!("{}{}", self.body, self.check_digit)
    }
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body, self.check_digit)?;
        if let Some(label) = &self.label {
            write!(f, "{}{}", LABEL_SEPARATOR, label)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

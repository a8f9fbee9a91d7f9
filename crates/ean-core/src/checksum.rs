//! # Checksum Module
//!
//! EAN-13 check digit over a 12-digit body.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index   0  1  2  3  4  5  6  7  8  9 10 11                             │
//! │  digit   2  1  1  2  3  4  5  0  0  0  0  0                             │
//! │  weight  1  3  1  3  1  3  1  3  1  3  1  3                             │
//! │  product 2  3  1  6  3 12  5  0  0  0  0  0   sum = 32                  │
//! │                                                                         │
//! │  check = (10 - 32 % 10) % 10 = 8   →   2112345000008                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::BarcodeBody;

/// Weight applied to digits at odd (0-based) positions.
const ODD_POSITION_WEIGHT: u32 = 3;

/// Computes the check digit for a body.
///
/// ## Example
/// ```rust
/// use ean_core::{checksum::check_digit, BarcodeBody};
///
/// let body = BarcodeBody::parse("211234500000").unwrap();
/// assert_eq!(check_digit(&body), 8);
/// ```
pub fn check_digit(body: &BarcodeBody) -> u8 {
    check_digit_of(body.digits())
}

/// Computes the check digit over any sequence of digit values (0..=9).
///
/// Weights alternate 1, 3, 1, 3, ... starting at the first digit.
pub fn check_digit_of<I>(digits: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let sum: u32 = digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                d
            } else {
                d * ODD_POSITION_WEIGHT
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

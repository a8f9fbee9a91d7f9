//! # Weight Encoder
//!
//! Writes a weight into the variable field of a body.
//!
//! ```text
//!   in:  21 12345 00000   weight "750"
//!            │
//!            ▼ keep prefix + product number, replace variable field
//!   out: 21 12345 00750
//! ```

use crate::types::{BarcodeBody, Weight};

/// Replaces the variable field of `body` with the zero-padded weight.
///
/// The product number is kept; whatever was in the variable field is
/// discarded.
///
/// ## Example
/// ```rust
/// use ean_core::{validation::validate_weight, weight::encode_weight, BarcodeBody};
///
/// let body = BarcodeBody::parse("211234599999").unwrap();
/// let weight = validate_weight("750").unwrap().unwrap();
/// assert_eq!(encode_weight(&body, &weight).as_str(), "211234500750");
/// ```
pub fn encode_weight(body: &BarcodeBody, weight: &Weight) -> BarcodeBody {
    BarcodeBody::from_fields(body.product_number(), &weight.padded())
}

/// Left-pads `value` with `0` up to `width` characters.
///
/// Values already at or beyond `width` are returned unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_weight;
    use proptest::prelude::*;

    fn weight(s: &str) -> Weight {
        validate_weight(s).unwrap().unwrap()
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad("0", 5), "00000");
        assert_eq!(zero_pad("750", 5), "00750");
        assert_eq!(zero_pad("12345", 5), "12345");
        assert_eq!(zero_pad("", 5), "00000");
        assert_eq!(zero_pad("1234567", 5), "1234567");
    }

    #[test]
    fn test_encode_weight_replaces_variable_field() {
        let body = BarcodeBody::parse("211234598765").unwrap();
        let encoded = encode_weight(&body, &weight("12345"));
        assert_eq!(encoded.as_str(), "211234512345");
        assert_eq!(encoded.product_number(), "12345");
        assert_eq!(encoded.variable_field(), "12345");
    }

    #[test]
    fn test_encode_zero_weight() {
        let body = BarcodeBody::parse("215432111111").unwrap();
        assert_eq!(encode_weight(&body, &weight("0")).as_str(), "215432100000");
    }

    proptest! {
        #[test]
        fn prop_encoded_body_keeps_product_and_pads(
            product in "[0-9]{5}",
            old in "[0-9]{5}",
            w in "[0-9]{1,5}",
        ) {
            let body = BarcodeBody::parse(&format!("21{}{}", product, old)).unwrap();
            let encoded = encode_weight(&body, &weight(&w));
            prop_assert_eq!(encoded.product_number(), product.as_str());
            prop_assert_eq!(encoded.variable_field().parse::<u32>().unwrap(), w.parse::<u32>().unwrap());
            prop_assert!(encoded.variable_field().ends_with(w.as_str()));
        }
    }
}

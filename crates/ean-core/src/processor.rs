//! # Processor Module
//!
//! The batch pipeline: lines + optional weight in, finished codes out.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Batch Pipeline                                    │
//! │                                                                         │
//! │  text ──► split_lines() ──► drop blank lines                           │
//! │                                 │                                       │
//! │                     for each line, in order                            │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                        validate_line() ──── Err ──► abort whole batch  │
//! │                                 │                   (no codes at all)  │
//! │                                 ▼                                       │
//! │                 weight? ── yes ──► encode_weight()                     │
//! │                    │ no                  │                              │
//! │                    ▼                     ▼                              │
//! │                        check_digit()                                    │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                 GeneratedCode (label kept or dropped by policy)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All or Nothing
//! The first invalid line fails the batch. Codes built for earlier lines are
//! discarded, never returned.
//!
//! No state survives between calls, so the same inputs always produce the
//! same output.

use crate::checksum::check_digit;
use crate::error::{CoreError, CoreResult};
use crate::types::{GeneratedCode, LabelPolicy, ParsedLine, Weight};
use crate::validation::{split_lines, validate_line, validate_weight};
use crate::weight::encode_weight;

// =============================================================================
// Options
// =============================================================================

/// Settings for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Written into every body when present.
    pub weight: Option<Weight>,
    /// What happens to line labels.
    pub label_policy: LabelPolicy,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, weight: Option<Weight>) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_label_policy(mut self, label_policy: LabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Processes a batch of lines with the default label policy.
///
/// ## Example
/// ```rust
/// use ean_core::process;
///
/// let codes = process(["2112345000001"], None).unwrap();
/// assert_eq!(codes[0].to_string(), "2112345000008");
///
/// // One bad line fails everything
/// assert!(process(["2112345000001", "bad-line"], None).is_err());
/// ```
pub fn process<I, S>(lines: I, weight: Option<&Weight>) -> CoreResult<Vec<GeneratedCode>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = ProcessOptions::new().with_weight(weight.cloned());
    process_with(lines, &options)
}

/// Processes a batch of lines.
///
/// Blank lines are skipped. The error for an invalid line carries its
/// 1-based position among the non-blank lines.
pub fn process_with<I, S>(lines: I, options: &ProcessOptions) -> CoreResult<Vec<GeneratedCode>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            validate_line(line.as_ref())
                .map(|parsed| generate(parsed, options))
                .map_err(|source| CoreError::InvalidLine {
                    line_number: index + 1,
                    source,
                })
        })
        .collect()
}

/// Processes a multi-line text block and a raw weight field.
///
/// The weight is checked before any line; an empty weight field means no
/// weight.
///
/// ## Example
/// ```rust
/// use ean_core::process_text;
///
/// let codes = process_text("2112345000001\n\n2112345000001-Apples\n", "750").unwrap();
/// assert_eq!(codes.len(), 2);
/// assert_eq!(codes[1].to_string(), "2112345007502-Apples");
///
/// let err = process_text("2112345000001", "123456").unwrap_err();
/// assert_eq!(err.to_string(), "Weight should not exceed 5 digits.");
/// ```
pub fn process_text(text: &str, weight_input: &str) -> CoreResult<Vec<GeneratedCode>> {
    let weight = validate_weight(weight_input)?;
    process(split_lines(text), weight.as_ref())
}

// =============================================================================
// Single Line
// =============================================================================

/// Turns one validated line into a finished code.
pub fn generate(parsed: ParsedLine, options: &ProcessOptions) -> GeneratedCode {
    let ParsedLine { body, label } = parsed;

    let body = match &options.weight {
        Some(weight) => encode_weight(&body, weight),
        None => body,
    };

    let check = check_digit(&body);

    let label = match options.label_policy {
        LabelPolicy::Append => label,
        LabelPolicy::Drop => None,
    };

    GeneratedCode::new(body, check, label)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    fn weight(s: &str) -> Weight {
        validate_weight(s).unwrap().unwrap()
    }

    fn rendered(codes: &[GeneratedCode]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_end_to_end_without_weight() {
        let codes = process(["2112345000001"], None).unwrap();
        assert_eq!(rendered(&codes), vec!["2112345000008"]);
    }

    #[test]
    fn test_end_to_end_with_weight() {
        let w = weight("750");
        let codes = process(["2112345000001", "2154321999999"], Some(&w)).unwrap();
        assert_eq!(codes[0].body().as_str(), "211234500750");
        assert_eq!(codes[1].body().as_str(), "215432100750");
        assert_eq!(codes[0].to_string(), "2112345007502");
    }

    #[test]
    fn test_batch_aborts_on_first_invalid_line() {
        let err = process(["2112345000001", "bad-line", "123"], None).unwrap_err();
        match err {
            CoreError::InvalidLine {
                line_number,
                source: ValidationError::InvalidBarcode { line },
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "bad-line");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_prefix_names_line() {
        let err = process(["123456789012"], None).unwrap_err();
        assert!(err.to_string().contains("123456789012"));
    }

    #[test]
    fn test_blank_lines_skipped_and_not_counted() {
        let err = process(["", "2112345000001", "   ", "nope"], None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLine { line_number: 2, .. }));

        let codes = process(["", "2112345000001", "\t"], None).unwrap();
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let codes = process(Vec::<String>::new(), None).unwrap();
        assert!(codes.is_empty());
        assert!(process_text("\n\n", "").unwrap().is_empty());
    }

    #[test]
    fn test_label_append_policy() {
        let codes = process(["2112345000001-Apples"], None).unwrap();
        assert_eq!(codes[0].to_string(), "2112345000008-Apples");

        // The label survives weight substitution too
        let w = weight("750");
        let codes = process(["2112345000001-Apples"], Some(&w)).unwrap();
        assert_eq!(codes[0].to_string(), "2112345007502-Apples");
    }

    #[test]
    fn test_label_drop_policy() {
        let options = ProcessOptions::new()
            .with_weight(Some(weight("750")))
            .with_label_policy(LabelPolicy::Drop);
        let codes = process_with(["2112345000001-Apples"], &options).unwrap();
        assert_eq!(rendered(&codes), vec!["2112345007502"]);
        assert_eq!(codes[0].label(), None);
    }

    #[test]
    fn test_label_does_not_change_check_digit() {
        let plain = process(["2112345000001"], None).unwrap();
        let labelled = process(["2112345000001-42"], None).unwrap();
        assert_eq!(plain[0].check_digit(), labelled[0].check_digit());
    }

    #[test]
    fn test_process_text_rejects_weight_before_lines() {
        let err = process_text("bad-line", "1234567").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::WeightTooLong { .. })
        ));
    }

    #[test]
    fn test_process_text_weight_boundaries() {
        let codes = process_text("2112345000001", "0").unwrap();
        assert_eq!(codes[0].body().variable_field(), "00000");

        let codes = process_text("2112345000001", "12345").unwrap();
        assert_eq!(codes[0].body().variable_field(), "12345");

        let err = process_text("2112345000001", "123456").unwrap_err();
        assert_eq!(err.to_string(), "Weight should not exceed 5 digits.");
    }

    #[test]
    fn test_process_text_crlf() {
        let codes = process_text("2112345000001\r\n2112345000001-Apples\r\n", "").unwrap();
        assert_eq!(
            rendered(&codes),
            vec!["2112345000008", "2112345000008-Apples"]
        );
    }

    proptest! {
        #[test]
        fn prop_generated_body_revalidates(
            tail in "[0-9]{10}",
            label in proptest::option::of("[A-Za-z][A-Za-z0-9 ]{0,8}"),
            w in proptest::option::of("[0-9]{1,5}"),
        ) {
            let line = match &label {
                Some(l) => format!("21{}-{}", tail, l),
                None => format!("21{}", tail),
            };
            let codes = process_text(&line, w.as_deref().unwrap_or("")).unwrap();
            let code = codes[0].to_string();
            prop_assert!(validate_line(&code[..12]).is_ok());
            prop_assert_eq!(&code[..12], codes[0].body().as_str());
        }

        #[test]
        fn prop_output_fed_back_is_unchanged(
            tail in "[0-9]{11}",
            label in proptest::option::of("[A-Za-z][A-Za-z0-9 ]{0,8}"),
        ) {
            // The 13th input digit is stale; generated codes are a fixed point
            let line = match &label {
                Some(l) => format!("21{}-{}", tail, l),
                None => format!("21{}", tail),
            };
            let first = process_text(&line, "").unwrap();
            let again = process_text(&first[0].to_string(), "").unwrap();
            prop_assert_eq!(first, again);
        }

        #[test]
        fn prop_process_is_idempotent(
            lines in proptest::collection::vec("21[0-9]{10}", 0..8),
            w in "[0-9]{0,5}",
        ) {
            let text = lines.join("\n");
            let first = process_text(&text, &w).unwrap();
            let second = process_text(&text, &w).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_any_invalid_line_yields_no_codes(
            good in proptest::collection::vec("21[0-9]{10}", 0..5),
            bad in "[a-z]{1,12}",
            position in 0usize..5,
        ) {
            let mut lines = good;
            let at = position.min(lines.len());
            lines.insert(at, bad.clone());
            let err = process(&lines, None).unwrap_err();
            prop_assert_eq!(
                err,
                CoreError::InvalidLine {
                    line_number: at + 1,
                    source: ValidationError::InvalidBarcode { line: bad },
                }
            );
        }
    }
}

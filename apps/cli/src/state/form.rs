//! # Form State
//!
//! The generator form: barcode text, weight field, results, error banner and
//! which code was copied last.
//!
//! ## Field Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action              Field changes                                     │
//! │  ──────              ─────────────                                     │
//! │  set_barcode_list    barcode_list = text, error cleared                │
//! │  set_weight   ok     weight = input, error cleared                     │
//! │               err    weight unchanged, error = range message           │
//! │  generate     ok     codes replaced, error + copied index cleared      │
//! │               err    error = format message, codes untouched           │
//! │  copy_code(i)        sink gets codes[i], copied index = i              │
//! │  copy_all            sink gets all codes newline-joined                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ean_core::sink::{copy_all, copy_code, ClipboardSink};
use ean_core::validation::{split_lines, validate_weight};
use ean_core::{
    process_with, CoreResult, GeneratedCode, LabelPolicy, ProcessOptions, ValidationError, Weight,
};

/// A copy request that cannot be served.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("No generated code at position {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// State of the generator form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    barcode_list: String,
    weight_input: String,
    weight: Option<Weight>,
    label_policy: LabelPolicy,
    generated_codes: Vec<GeneratedCode>,
    error_message: Option<String>,
    copied_index: Option<usize>,
}

impl FormState {
    /// Creates an empty form.
    pub fn new(label_policy: LabelPolicy) -> Self {
        FormState {
            label_policy,
            ..Default::default()
        }
    }

    /// Replaces the barcode text and clears any error.
    pub fn set_barcode_list(&mut self, text: impl Into<String>) {
        self.barcode_list = text.into();
        self.error_message = None;
    }

    /// Accepts or rejects a new weight field value.
    ///
    /// A rejected value leaves the previous weight in place.
    pub fn set_weight(&mut self, input: &str) -> Result<(), ValidationError> {
        match validate_weight(input) {
            Ok(weight) => {
                self.weight_input = input.to_string();
                self.weight = weight;
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Runs the batch over the current text and weight.
    ///
    /// On failure the previous results stay as they were; nothing from the
    /// failed run is kept.
    pub fn generate(&mut self) -> CoreResult<&[GeneratedCode]> {
        let options = ProcessOptions::new()
            .with_weight(self.weight.clone())
            .with_label_policy(self.label_policy);

        match process_with(split_lines(&self.barcode_list), &options) {
            Ok(codes) => {
                self.generated_codes = codes;
                self.error_message = None;
                self.copied_index = None;
                Ok(self.generated_codes.as_slice())
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Copies one code and marks it as copied.
    pub fn copy_code<S>(&mut self, index: usize, sink: &mut S) -> Result<(), CopyError>
    where
        S: ClipboardSink + ?Sized,
    {
        let code = self
            .generated_codes
            .get(index)
            .ok_or(CopyError::IndexOutOfRange {
                index,
                len: self.generated_codes.len(),
            })?;
        copy_code(sink, code);
        self.copied_index = Some(index);
        Ok(())
    }

    /// Copies every code, one per line.
    pub fn copy_all<S>(&self, sink: &mut S)
    where
        S: ClipboardSink + ?Sized,
    {
        copy_all(sink, &self.generated_codes);
    }

    pub fn barcode_list(&self) -> &str {
        &self.barcode_list
    }

    /// The weight field as last accepted.
    pub fn weight_input(&self) -> &str {
        &self.weight_input
    }

    pub fn generated_codes(&self) -> &[GeneratedCode] {
        &self.generated_codes
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn copied_index(&self) -> Option<usize> {
        self.copied_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ean_core::sink::RecordingSink;

    fn rendered(form: &FormState) -> Vec<String> {
        form.generated_codes().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_generate_success() {
        let mut form = FormState::new(LabelPolicy::Append);
        form.set_barcode_list("2112345000001\n\n2112345000001-Apples");
        let codes = form.generate().unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(
            rendered(&form),
            vec!["2112345000008", "2112345000008-Apples"]
        );
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn test_generate_with_weight_and_drop_policy() {
        let mut form = FormState::new(LabelPolicy::Drop);
        form.set_weight("750").unwrap();
        form.set_barcode_list("2112345000001-Apples");
        form.generate().unwrap();
        assert_eq!(rendered(&form), vec!["2112345007502"]);
    }

    #[test]
    fn test_rejected_weight_keeps_previous() {
        let mut form = FormState::new(LabelPolicy::Append);
        form.set_weight("750").unwrap();
        assert!(form.set_weight("123456").is_err());
        assert_eq!(form.weight_input(), "750");
        assert_eq!(
            form.error_message(),
            Some("Weight should not exceed 5 digits.")
        );

        // Editing the text clears the banner
        form.set_barcode_list("2112345000001");
        assert_eq!(form.error_message(), None);

        form.generate().unwrap();
        assert_eq!(form.generated_codes()[0].body().variable_field(), "00750");
    }

    #[test]
    fn test_failed_generate_keeps_old_codes() {
        let mut form = FormState::new(LabelPolicy::Append);
        form.set_barcode_list("2112345000001");
        form.generate().unwrap();

        form.set_barcode_list("2154321000000\nbad-line");
        assert!(form.generate().is_err());
        assert_eq!(rendered(&form), vec!["2112345000008"]);
        assert!(form
            .error_message()
            .unwrap()
            .starts_with("Invalid barcode: bad-line."));
    }

    #[test]
    fn test_copy_code_marks_index() {
        let mut form = FormState::new(LabelPolicy::Append);
        form.set_barcode_list("2112345000001\n2154321000000");
        form.generate().unwrap();

        let mut sink = RecordingSink::default();
        form.copy_code(1, &mut sink).unwrap();
        assert_eq!(sink.last(), Some("2154321000008"));
        assert_eq!(form.copied_index(), Some(1));

        // A new run resets the copied marker
        form.generate().unwrap();
        assert_eq!(form.copied_index(), None);
    }

    #[test]
    fn test_copy_code_out_of_range() {
        let mut form = FormState::new(LabelPolicy::Append);
        let mut sink = RecordingSink::default();
        let err = form.copy_code(0, &mut sink).unwrap_err();
        assert!(matches!(err, CopyError::IndexOutOfRange { index: 0, len: 0 }));
        assert!(sink.copied().is_empty());
        assert_eq!(form.copied_index(), None);
    }

    #[test]
    fn test_copy_all() {
        let mut form = FormState::new(LabelPolicy::Append);
        form.set_barcode_list("2112345000001\n2154321000000");
        form.generate().unwrap();

        let mut sink = RecordingSink::default();
        form.copy_all(&mut sink);
        assert_eq!(sink.last(), Some("2112345000008\n2154321000008"));
    }
}

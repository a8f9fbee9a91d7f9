//! # Clipboard Sink
//!
//! The clipboard is an environment capability, so the core only defines the
//! seam. Front ends inject an implementation (the CLI writes an OSC 52
//! terminal sequence); tests use [`RecordingSink`].

use crate::types::GeneratedCode;

/// Something that can receive copied text.
///
/// Fire-and-forget: implementations handle their own failures, the caller
/// never observes a result.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str);
}

/// Copies a single finished code.
pub fn copy_code<S: ClipboardSink + ?Sized>(sink: &mut S, code: &GeneratedCode) {
    sink.copy(&code.to_string());
}

/// Copies every code, one per line.
///
/// ## Example
/// ```rust
/// use ean_core::process_text;
/// use ean_core::sink::{copy_all, RecordingSink};
///
/// let codes = process_text("2112345000001\n2112345000001-Apples", "").unwrap();
/// let mut sink = RecordingSink::default();
/// copy_all(&mut sink, &codes);
/// assert_eq!(sink.last(), Some("2112345000008\n2112345000008-Apples"));
/// ```
pub fn copy_all<S: ClipboardSink + ?Sized>(sink: &mut S, codes: &[GeneratedCode]) {
    sink.copy(&join_codes(codes));
}

/// Newline-joined rendering of a code list.
pub fn join_codes(codes: &[GeneratedCode]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sink that keeps everything it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    copied: Vec<String>,
}

impl RecordingSink {
    /// All copied texts, oldest first.
    pub fn copied(&self) -> &[String] {
        &self.copied
    }

    /// The most recent copy.
    pub fn last(&self) -> Option<&str> {
        self.copied.last().map(String::as_str)
    }
}

impl ClipboardSink for RecordingSink {
    fn copy(&mut self, text: &str) {
        self.copied.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process;

    #[test]
    fn test_copy_code() {
        let codes = process(["2112345000001-Apples"], None).unwrap();
        let mut sink = RecordingSink::default();
        copy_code(&mut sink, &codes[0]);
        assert_eq!(sink.copied(), ["2112345000008-Apples".to_string()]);
    }

    #[test]
    fn test_copy_all_empty_list() {
        let mut sink = RecordingSink::default();
        copy_all(&mut sink, &[]);
        assert_eq!(sink.last(), Some(""));
    }

    #[test]
    fn test_trait_object_sink() {
        let mut recording = RecordingSink::default();
        let codes = process(["2112345000001", "2154321000000"], None).unwrap();
        {
            let sink: &mut dyn ClipboardSink = &mut recording;
            copy_all(sink, &codes);
            copy_code(sink, &codes[1]);
        }
        assert_eq!(recording.copied().len(), 2);
        assert_eq!(recording.copied()[0], "2112345000008\n2154321000008");
        assert_eq!(recording.last(), Some("2154321000008"));
    }
}

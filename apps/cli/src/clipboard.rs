//! # Terminal Clipboard
//!
//! [`ClipboardSink`] implementations for the command line.
//!
//! ## OSC 52
//! ```text
//!   ESC ] 52 ; c ; <base64 payload> BEL
//!   └─ operating system command 52: "set clipboard c to payload"
//! ```
//! Most modern terminals (and tmux with `set-clipboard on`) honor it, also
//! over SSH. The sequence goes to stderr so stdout stays pipeable.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ean_core::ClipboardSink;
use tracing::{debug, info, warn};

/// Writes the OSC 52 clipboard sequence to a writer.
pub struct Osc52Sink<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Sink<W> {
    pub fn new(writer: W) -> Self {
        Osc52Sink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The full escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ClipboardSink for Osc52Sink<W> {
    fn copy(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.writer.flush());

        match result {
            Ok(()) => info!(bytes = text.len(), "copied to clipboard"),
            Err(e) => warn!(error = %e, "clipboard write failed"),
        }
    }
}

/// Sink used when the clipboard is turned off in configuration.
#[derive(Debug, Default)]
pub struct DisabledSink;

impl ClipboardSink for DisabledSink {
    fn copy(&mut self, text: &str) {
        debug!(bytes = text.len(), "clipboard disabled, copy skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        // base64("2112345000008") = "MjExMjM0NTAwMDAwOA=="
        assert_eq!(
            osc52_sequence("2112345000008"),
            "\x1b]52;c;MjExMjM0NTAwMDAwOA==\x07"
        );
    }

    #[test]
    fn test_sink_writes_sequence() {
        let mut sink = Osc52Sink::new(Vec::new());
        sink.copy("a\nb");
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;YQpi\x07");
    }
}

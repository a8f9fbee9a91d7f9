//! # State Module
//!
//! UI state for the generator form, kept apart from the pure pipeline in
//! `ean-core`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State                                           │
//! │                                                                         │
//! │  barcode_list ─┐                                                        │
//! │  weight ───────┼──► generate() ──► ean_core::process_with()            │
//! │                │         │                                              │
//! │                │         ├── Ok  ──► generated_codes, error cleared    │
//! │                │         └── Err ──► error_message, old codes kept     │
//! │                │                                                        │
//! │  copied_index ◄┴── copy_code(i, sink)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod form;

pub use form::{CopyError, FormState};

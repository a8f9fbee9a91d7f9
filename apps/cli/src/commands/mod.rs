//! # Commands Module
//!
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! └── generate.rs  ◄─── Read lines, generate codes, print, copy
//! ```
//!
//! Commands take their I/O handles as parameters so tests can drive them
//! with in-memory buffers and a recording clipboard sink.

pub mod generate;

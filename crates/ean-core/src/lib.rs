//! # ean-core: Pure Barcode Logic for EAN-13 Forge
//!
//! This crate turns partial in-store barcodes into complete EAN-13 codes.
//! It contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       EAN-13 Forge Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`ean13`)                           │   │
//! │  │    args ──► FormState ──► output ──► OSC 52 clipboard sink      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ean-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │─►│  weight   │─►│ checksum  │─►│ processor │  │   │
//! │  │   │ lines     │  │ encoder   │  │ mod-10    │  │  batches  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLIPBOARD • NO TERMINAL • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BarcodeBody, Weight, GeneratedCode, etc.)
//! - [`validation`] - Line and weight input validation
//! - [`weight`] - Writes a weight into the variable field of a body
//! - [`checksum`] - EAN-13 check digit
//! - [`processor`] - All-or-nothing batch pipeline
//! - [`sink`] - Clipboard sink interface
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ean_core::processor::process_text;
//!
//! let codes = process_text("2112345000001\n\n2154321000000-Apples", "").unwrap();
//! assert_eq!(codes[0].to_string(), "2112345000008");
//!
//! let weighed = process_text("2112345000001", "750").unwrap();
//! assert_eq!(weighed[0].body().as_str(), "211234500750");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod error;
pub mod processor;
pub mod sink;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use processor::{process, process_text, process_with, ProcessOptions};
pub use sink::ClipboardSink;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Literal prefix every body starts with.
///
/// `21` is in the GS1 restricted-circulation range used for variable-measure
/// items weighed at the counter.
pub const BODY_PREFIX: &str = "21";

/// Number of digits in a body (the check digit makes it 13).
pub const BODY_LEN: usize = 12;

/// Width of the product-number field.
pub const PRODUCT_NUMBER_LEN: usize = 5;

/// Width of the variable (weight) field, and the longest accepted weight.
pub const WEIGHT_FIELD_LEN: usize = 5;

/// Separator between the body digits and an optional label.
pub const LABEL_SEPARATOR: char = '-';

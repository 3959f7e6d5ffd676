//! # gtin-core: Pure GTIN Logic
//!
//! Validation, parsing and check digit generation for Global Trade Item
//! Numbers: GTIN-8 (EAN-8), GTIN-12 (UPC-A), GTIN-13 (EAN-13) and GTIN-14.
//! Every function is pure; there is no I/O and no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where gtin-core Sits                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │       Register UI / Product import / Inventory API              │   │
//! │  │    scanner line ──► read_scan    product form ──► Gtin::parse   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gtin-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  format   │  │ checksum  │  │validation │  │   gtin    │  │   │
//! │  │   │GtinFormat │  │  mod-10   │  │ matches_* │  │   Gtin    │  │   │
//! │  │   │ lookups   │  │check digit│  │ is_valid* │  │ value type│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │  config   │  │   scan    │  │   error   │                  │   │
//! │  │   │ScanConfig │  │ read_scan │  │ GtinError │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ (optional `sqlx` feature)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            products.barcode TEXT column (SQLite)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`format`] - The four GTIN formats and their lookups
//! - [`checksum`] - GS1 mod-10 check digit
//! - [`validation`] - Format matching and validation predicates
//! - [`gtin`] - The validated `Gtin` value type
//! - [`config`] - Scanner input policy
//! - [`scan`] - Classifying scanner/search input
//! - [`error`] - Error types
//!
//! ## Design Principles
//!
//! 1. **Fail safe vs fail fast**: predicates answer `bool` for any input;
//!    constructors and lookups return typed errors
//! 2. **Valid by construction**: a `Gtin` always has a correct check digit
//! 3. **No normalization**: whitespace, signs and separators are rejected,
//!    except where [`ScanConfig`] says to trim scanner input
//!
//! ## Example Usage
//!
//! ```rust
//! use gtin_core::{validation, Gtin, GtinFormat};
//! use gtin_core::checksum::with_check_digit;
//!
//! assert!(validation::is_valid("40123455"));
//!
//! let code = with_check_digit("400638133393").unwrap();
//! assert_eq!(code, "4006381333931");
//!
//! let gtin = Gtin::parse(&code).unwrap();
//! assert_eq!(gtin.format(), GtinFormat::Gtin13);
//! assert_eq!(gtin.to_string(), code);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod config;
pub mod error;
pub mod format;
pub mod gtin;
pub mod scan;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checksum::{calculate_check_digit, with_check_digit};
pub use config::ScanConfig;
pub use error::{FormatError, GtinError, GtinResult, Rejection};
pub use format::GtinFormat;
pub use gtin::Gtin;
pub use scan::{read_scan, ScanOutcome};
pub use validation::{is_valid, is_valid_for, matches_any_format, matches_format};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Digit counts of complete GTINs, shortest first.
pub const SUPPORTED_LENGTHS: [usize; 4] = [8, 12, 13, 14];

/// Longest GTIN (GTIN-14). Also the width GS1 pads every GTIN to in
/// GS1-128 application identifier `(01)`.
pub const MAX_GTIN_LENGTH: usize = 14;

/// Shortest payload that can take a check digit (GTIN-8 without it).
pub const MIN_PAYLOAD_LENGTH: usize = 7;

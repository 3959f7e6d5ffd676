//! # Error Types
//!
//! Domain-specific error types for gtin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gtin-core errors (this file)                                          │
//! │  ├── GtinError    - Parsing, check digits, digit access, config        │
//! │  │   └── Rejection  - Why a string is not a (partial) GTIN             │
//! │  └── FormatError  - Format catalog reverse lookups                     │
//! │                                                                         │
//! │  Flow: Rejection → GtinError::InvalidFormat                            │
//! │        FormatError → GtinError::Format                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Predicates (`is_valid`, `matches_format`) never produce these errors;
//!    only constructors, check digit calculators and lookups do

use thiserror::Error;

// =============================================================================
// Rejection
// =============================================================================

/// The precise reason a string was refused as a GTIN (or GTIN payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Contains something other than ASCII digits `0-9`, or is empty.
    #[error("must contain only the digits 0-9")]
    NotNumeric,

    /// Digit count does not belong to any supported format (or, for
    /// scanner input, to any format the register accepts).
    #[error("length {0} does not match any GTIN format")]
    UnsupportedLength(usize),

    /// The last digit disagrees with the computed check digit.
    #[error("check digit {found} does not match expected {expected}")]
    CheckDigitMismatch { expected: u8, found: u8 },
}

// =============================================================================
// GTIN Error
// =============================================================================

/// Errors raised by GTIN construction and inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GtinError {
    /// Input is not a valid GTIN (or not a valid partial GTIN).
    ///
    /// ## When This Occurs
    /// - Input has letters, whitespace, signs or separators
    /// - Length is not 8/12/13/14 (or 7/11/12/13 for payloads)
    /// - Check digit does not match (validating constructors only)
    #[error("'{input}' is not a valid gtin: {rejection}")]
    InvalidFormat { input: String, rejection: Rejection },

    /// Digit position outside `0..length`.
    #[error("position {position} is out of range for a {length}-digit gtin")]
    IndexOutOfRange { position: usize, length: usize },

    /// Format catalog lookup failed (wraps FormatError).
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Scanner configuration cannot be used.
    #[error("invalid scan configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GtinError {
    /// Shorthand for building an `InvalidFormat` error.
    pub(crate) fn invalid(input: &str, rejection: Rejection) -> Self {
        GtinError::InvalidFormat {
            input: input.to_string(),
            rejection,
        }
    }
}

// =============================================================================
// Format Error
// =============================================================================

/// Reverse lookup failures in the format catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format carries this name.
    #[error("name '{0}' does not match the name of any known GTIN format")]
    UnknownFormatName(String),

    /// No format has this digit count.
    #[error("length {0} does not match the length of any known GTIN format")]
    UnknownFormatLength(usize),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with GtinError.
pub type GtinResult<T> = Result<T, GtinError>;

// =============================================================================
// Unit Tests
// =============================================================================

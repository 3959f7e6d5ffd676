//! # Validation Module
//!
//! Format matching and GTIN validation.
//!
//! ## Two Kinds of Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Entry Points                            │
//! │                                                                         │
//! │  Predicates (never fail, any &str in → bool out)                       │
//! │  ├── matches_any_format / matches_format / matches_format_N            │
//! │  │     digits only + supported length                                  │
//! │  └── is_valid / is_valid_for / is_valid_N                              │
//! │        ... + check digit                                               │
//! │                                                                         │
//! │  Checks (typed error explains the rejection)                           │
//! │  ├── validate_gtin     → GtinFormat | InvalidFormat                    │
//! │  └── validate_payload  → GtinFormat | InvalidFormat                    │
//! │                                                                         │
//! │  Gtin::parse and the check digit utilities are built on the checks.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here trims or normalizes input: `" 40123455"` is not a GTIN.
//! Scanner clean-up belongs to [`crate::scan`].
//!
//! ## Usage
//! ```rust
//! use gtin_core::validation::{is_valid, matches_any_format, matches_format};
//! use gtin_core::GtinFormat;
//!
//! assert!(is_valid("40123455"));
//! assert!(!is_valid("40123456"));          // wrong check digit
//! assert!(matches_any_format("40123456")); // ...but well-formed
//! assert!(!matches_format("12345678", GtinFormat::Gtin12));
//! ```

use crate::checksum::ascii_check_digit;
use crate::error::{GtinError, Rejection};
use crate::format::GtinFormat;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, GtinError>;

/// Non-empty and only ASCII `0-9`.
#[inline]
fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Format Matching
// =============================================================================

/// `true` if `s` is only digits and has the length of some GTIN format.
///
/// The check digit is not verified.
pub fn matches_any_format(s: &str) -> bool {
    GtinFormat::for_length(s.len()).is_ok() && is_all_digits(s)
}

/// `true` if `s` is only digits and has exactly `format.length()` digits.
pub fn matches_format(s: &str, format: GtinFormat) -> bool {
    s.len() == format.length() && is_all_digits(s)
}

/// Same as `matches_format(s, GtinFormat::Gtin8)`.
pub fn matches_format_8(s: &str) -> bool {
    matches_format(s, GtinFormat::Gtin8)
}

/// Same as `matches_format(s, GtinFormat::Gtin12)`.
pub fn matches_format_12(s: &str) -> bool {
    matches_format(s, GtinFormat::Gtin12)
}

/// Same as `matches_format(s, GtinFormat::Gtin13)`.
pub fn matches_format_13(s: &str) -> bool {
    matches_format(s, GtinFormat::Gtin13)
}

/// Same as `matches_format(s, GtinFormat::Gtin14)`.
pub fn matches_format_14(s: &str) -> bool {
    matches_format(s, GtinFormat::Gtin14)
}

// =============================================================================
// Validation Predicates
// =============================================================================

/// `true` if `s` is a complete GTIN of any format with a correct check digit.
///
/// ## Example
/// ```rust
/// use gtin_core::validation::is_valid;
///
/// assert!(is_valid("4006381333931"));
/// assert!(!is_valid("4006381333932"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("4006381 333931"));
/// ```
pub fn is_valid(s: &str) -> bool {
    validate_gtin(s).is_ok()
}

/// `true` if `s` is a valid GTIN of exactly the given format.
pub fn is_valid_for(s: &str, format: GtinFormat) -> bool {
    matches_format(s, format) && is_valid(s)
}

/// Same as `is_valid_for(s, GtinFormat::Gtin8)`.
pub fn is_valid_8(s: &str) -> bool {
    is_valid_for(s, GtinFormat::Gtin8)
}

/// Same as `is_valid_for(s, GtinFormat::Gtin12)`.
pub fn is_valid_12(s: &str) -> bool {
    is_valid_for(s, GtinFormat::Gtin12)
}

/// Same as `is_valid_for(s, GtinFormat::Gtin13)`.
pub fn is_valid_13(s: &str) -> bool {
    is_valid_for(s, GtinFormat::Gtin13)
}

/// Same as `is_valid_for(s, GtinFormat::Gtin14)`.
pub fn is_valid_14(s: &str) -> bool {
    is_valid_for(s, GtinFormat::Gtin14)
}

// =============================================================================
// Checks
// =============================================================================

/// Validates a complete GTIN and returns its format.
///
/// ## Rules
/// - Only the digits 0-9
/// - Length 8, 12, 13 or 14
/// - Last digit equals the check digit of the preceding digits
///
/// ## Errors
/// `GtinError::InvalidFormat` with the first rule that failed.
pub fn validate_gtin(s: &str) -> ValidationResult<GtinFormat> {
    if !is_all_digits(s) {
        return Err(GtinError::invalid(s, Rejection::NotNumeric));
    }

    let format = GtinFormat::for_length(s.len())
        .map_err(|_| GtinError::invalid(s, Rejection::UnsupportedLength(s.len())))?;

    // Non-empty: checked above.
    let (payload, check) = s.split_at(s.len() - 1);
    let expected = ascii_check_digit(payload);
    let found = check.as_bytes()[0] - b'0';

    if expected != found {
        return Err(GtinError::invalid(
            s,
            Rejection::CheckDigitMismatch { expected, found },
        ));
    }

    Ok(format)
}

/// Validates a GTIN payload (a code without its check digit) and returns the
/// format it would complete to.
///
/// ## Errors
/// `GtinError::InvalidFormat` if `s` has non-digits or `s.len() + 1` is not
/// a GTIN length.
pub fn validate_payload(s: &str) -> ValidationResult<GtinFormat> {
    if !is_all_digits(s) {
        return Err(GtinError::invalid(s, Rejection::NotNumeric));
    }

    GtinFormat::for_payload_length(s.len())
        .ok_or_else(|| GtinError::invalid(s, Rejection::UnsupportedLength(s.len())))
}

// =============================================================================
// Unit Tests
// =============================================================================

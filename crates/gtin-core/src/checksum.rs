//! # Checksum Module
//!
//! The GS1 mod-10 check digit, shared by every GTIN format.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Payload of GTIN-13 "400638133393" + check digit ?                      │
//! │                                                                         │
//! │  digit     4  0  0  6  3  8  1  3  3  3  9  3                           │
//! │  weight    1  3  1  3  1  3  1  3  1  3  1  3   ◄── 3 on the rightmost  │
//! │            ─────────────────────────────────        payload digit,      │
//! │  product   4  0  0 18  3 24  1  9  3  9  9  9       alternating leftward│
//! │                                                                         │
//! │  sum = 89          check = (10 - 89 % 10) % 10 = 1                      │
//! │                                                                         │
//! │  Result: 4006381333931                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Weights are counted from the right, so the same function serves all four
//! lengths, and left-padding a code with zeros never changes its check digit.
//!
//! ## Usage
//! ```rust
//! use gtin_core::checksum::{calculate_check_digit, with_check_digit};
//!
//! assert_eq!(calculate_check_digit("400638133393").unwrap(), 1);
//! assert_eq!(with_check_digit("400638133393").unwrap(), "4006381333931");
//! assert!(with_check_digit("40063813339").is_ok()); // 11 digits -> GTIN-12
//! assert!(with_check_digit("4006381333").is_err()); // 10 digits -> nothing
//! ```

use tracing::trace;

use crate::error::GtinResult;
use crate::validation::validate_payload;

// =============================================================================
// Digit-level Algorithm
// =============================================================================

/// Weighted mod-10 over digits given right-to-left.
fn check_digit_from_right(digits_rev: impl Iterator<Item = u8>) -> u8 {
    let sum: u32 = digits_rev
        .enumerate()
        .map(|(i, digit)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            u32::from(digit) * weight
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Computes the check digit for a payload of digit values (each `0..=9`).
///
/// The payload is the code without its final check digit. Any payload length
/// is accepted; length rules live in [`crate::validation`].
///
/// ## Example
/// ```rust
/// use gtin_core::checksum::check_digit;
///
/// assert_eq!(check_digit(&[4, 0, 1, 2, 3, 4, 5]), 5); // 40123455
/// ```
pub fn check_digit(payload: &[u8]) -> u8 {
    check_digit_from_right(payload.iter().rev().copied())
}

/// Check digit of a payload given as ASCII digits.
///
/// Callers must have verified that `payload` is all ASCII digits.
pub(crate) fn ascii_check_digit(payload: &str) -> u8 {
    check_digit_from_right(payload.bytes().rev().map(|b| b - b'0'))
}

// =============================================================================
// String-level Utilities
// =============================================================================

/// Calculates the check digit for a partial GTIN.
///
/// ## Rules
/// - `partial` must contain only the digits 0-9
/// - `partial.len() + 1` must be 8, 12, 13 or 14
///
/// ## Errors
/// `GtinError::InvalidFormat` if `partial` is not a valid GTIN payload.
pub fn calculate_check_digit(partial: &str) -> GtinResult<u8> {
    let format = validate_payload(partial)?;
    let digit = ascii_check_digit(partial);

    trace!(payload = %partial, format = %format, check_digit = digit, "Calculated check digit");
    Ok(digit)
}

/// Returns `partial` with its check digit appended.
///
/// ## Errors
/// `GtinError::InvalidFormat` under the same rules as [`calculate_check_digit`].
pub fn with_check_digit(partial: &str) -> GtinResult<String> {
    let digit = calculate_check_digit(partial)?;

    let mut code = String::with_capacity(partial.len() + 1);
    code.push_str(partial);
    code.push(char::from(b'0' + digit));
    Ok(code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GtinError, Rejection};

    #[test]
    fn test_check_digit_reference_codes() {
        // GTIN-8: 40123455
        assert_eq!(check_digit(&[4, 0, 1, 2, 3, 4, 5]), 5);
        // GTIN-13: 4006381333931
        assert_eq!(check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        // GTIN-12: 123456789012
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]), 2);
    }

    #[test]
    fn test_check_digit_zero_when_sum_divisible_by_ten() {
        assert_eq!(check_digit(&[0; 13]), 0);
        // 3*5 + 1*5 = 20
        assert_eq!(check_digit(&[5, 5]), 0);
    }

    #[test]
    fn test_leading_zeros_do_not_change_check_digit() {
        let short = [4, 0, 1, 2, 3, 4, 5];
        let padded = [0, 0, 0, 0, 0, 0, 4, 0, 1, 2, 3, 4, 5];
        assert_eq!(check_digit(&short), check_digit(&padded));
    }

    #[test]
    fn test_calculate_check_digit() {
        assert_eq!(calculate_check_digit("4012345"), Ok(5));
        assert_eq!(calculate_check_digit("400638133393"), Ok(1));
        assert_eq!(calculate_check_digit("1061414100041"), Ok(5));
        assert_eq!(calculate_check_digit("7351353"), Ok(7));
    }

    #[test]
    fn test_calculate_check_digit_rejects_bad_payloads() {
        assert_eq!(
            calculate_check_digit("40123455"),
            Err(GtinError::invalid("40123455", Rejection::UnsupportedLength(8)))
        );
        assert_eq!(
            calculate_check_digit("40l2345"),
            Err(GtinError::invalid("40l2345", Rejection::NotNumeric))
        );
        assert!(calculate_check_digit("").is_err());
        assert!(calculate_check_digit("12345678901234").is_err());
    }

    #[test]
    fn test_with_check_digit() {
        assert_eq!(with_check_digit("400638133393").unwrap(), "4006381333931");
        assert_eq!(with_check_digit("4012345").unwrap(), "40123455");
        assert_eq!(with_check_digit("3495735473895").unwrap(), "34957354738950");
        assert!(with_check_digit("400638133").is_err());
    }
}

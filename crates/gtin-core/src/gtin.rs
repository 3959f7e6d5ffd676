//! # GTIN Value Type
//!
//! [`Gtin`] is a validated Global Trade Item Number.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "4006381333931" ──► Gtin::parse                                        │
//! │                        digits, length, checksum ──┐                     │
//! │                                                   ├──► Gtin (immutable) │
//! │  "400638133393"  ──► Gtin::parse_without_check_digit                    │
//! │                        digits, length; appends 1 ─┘          │          │
//! │                                                              │          │
//! │        ┌──────────────────┬──────────────────────────────────┤          │
//! │        ▼                  ▼                                  ▼          │
//! │   format()/length()   check_digit()        to_string() / serde / sqlx   │
//! │   digit_at(i)         payload()            (exact digit string)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Gtin` can only be obtained through a validating constructor, so every
//! instance satisfies the checksum. Deserialization goes through the same
//! validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

use crate::checksum::with_check_digit;
use crate::error::{GtinError, GtinResult};
use crate::format::GtinFormat;
use crate::validation::{validate_gtin, validate_payload};

/// A valid GTIN-8, GTIN-12, GTIN-13 or GTIN-14.
///
/// ## Equality
/// Two GTINs are equal when their digit strings are equal. Leading zeros are
/// significant: `"0012345678905"` (GTIN-13) and `"012345678905"` (GTIN-12)
/// are different values.
///
/// ## Example
/// ```rust
/// use gtin_core::{Gtin, GtinFormat};
///
/// let gtin = Gtin::parse("4006381333931").unwrap();
/// assert_eq!(gtin.format(), GtinFormat::Gtin13);
/// assert_eq!(gtin.check_digit(), 1);
/// assert_eq!(gtin.to_string(), "4006381333931");
///
/// assert!(Gtin::parse("4006381333932").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gtin {
    /// ASCII digits, check digit last.
    code: String,
    /// Derived from `code.len()`.
    format: GtinFormat,
}

impl Gtin {
    /// Parses a complete GTIN.
    ///
    /// Use [`crate::validation::is_valid`] first when a boolean answer is
    /// enough.
    ///
    /// ## Errors
    /// `GtinError::InvalidFormat` if `s` has non-digits, an unsupported
    /// length, or a wrong check digit.
    pub fn parse(s: &str) -> GtinResult<Gtin> {
        let format = validate_gtin(s).inspect_err(|err| {
            debug!(input = %s, error = %err, "Rejected gtin");
        })?;

        Ok(Gtin {
            code: s.to_string(),
            format,
        })
    }

    /// Builds a GTIN from a payload by appending its check digit.
    ///
    /// ## Example
    /// ```rust
    /// use gtin_core::{Gtin, GtinFormat};
    ///
    /// let gtin = Gtin::parse_without_check_digit("400638133393").unwrap();
    /// assert_eq!(gtin.as_str(), "4006381333931");
    /// assert_eq!(gtin.format(), GtinFormat::Gtin13);
    /// ```
    ///
    /// ## Errors
    /// `GtinError::InvalidFormat` if `partial` has non-digits or
    /// `partial.len() + 1` is not 8, 12, 13 or 14.
    pub fn parse_without_check_digit(partial: &str) -> GtinResult<Gtin> {
        let format = validate_payload(partial).inspect_err(|err| {
            debug!(input = %partial, error = %err, "Rejected gtin payload");
        })?;

        Ok(Gtin {
            code: with_check_digit(partial)?,
            format,
        })
    }

    /// The format, determined by the number of digits.
    #[inline]
    pub fn format(&self) -> GtinFormat {
        self.format
    }

    /// Number of digits, including the check digit.
    #[inline]
    pub fn length(&self) -> usize {
        self.code.len()
    }

    /// The final digit.
    pub fn check_digit(&self) -> u8 {
        let (_, check) = self.code.split_at(self.code.len() - 1);
        check.as_bytes()[0] - b'0'
    }

    /// Digit at `position`, counted from the left starting at 0.
    ///
    /// ## Errors
    /// `GtinError::IndexOutOfRange` unless `position < self.length()`.
    pub fn digit_at(&self, position: usize) -> GtinResult<u8> {
        self.code
            .as_bytes()
            .get(position)
            .map(|b| b - b'0')
            .ok_or(GtinError::IndexOutOfRange {
                position,
                length: self.length(),
            })
    }

    /// Digit values from left to right.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.code.bytes().map(|b| b - b'0')
    }

    /// All digits except the check digit.
    pub fn payload(&self) -> &str {
        &self.code[..self.code.len() - 1]
    }

    /// The GTIN as a digit string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Exact string comparison; `s` is not validated.
    #[inline]
    pub fn eq_str(&self, s: &str) -> bool {
        self.code == s
    }
}

// =============================================================================
// Equality & Hashing
// =============================================================================
// Only the digit string participates. The format is a function of its length.

impl PartialEq for Gtin {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Gtin {}

impl Hash for Gtin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<str> for Gtin {
    fn eq(&self, other: &str) -> bool {
        self.eq_str(other)
    }
}

impl PartialEq<&str> for Gtin {
    fn eq(&self, other: &&str) -> bool {
        self.eq_str(other)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gtin::parse(s)
    }
}

impl TryFrom<String> for Gtin {
    type Error = GtinError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        let format = validate_gtin(&code)?;
        Ok(Gtin { code, format })
    }
}

impl TryFrom<&str> for Gtin {
    type Error = GtinError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Gtin::parse(s)
    }
}

impl From<Gtin> for String {
    fn from(gtin: Gtin) -> Self {
        gtin.code
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

// =============================================================================
// Database Column (sqlx)
// =============================================================================
// Stored as TEXT. Decoding re-validates, so a corrupted row surfaces as a
// decode error instead of an invalid Gtin.

#[cfg(feature = "sqlx")]
mod sqlite {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
    use sqlx::{Database, Decode, Encode, Type};

    use super::Gtin;

    impl Type<Sqlite> for Gtin {
        fn type_info() -> SqliteTypeInfo {
            <String as Type<Sqlite>>::type_info()
        }

        fn compatible(ty: &SqliteTypeInfo) -> bool {
            <String as Type<Sqlite>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Sqlite> for Gtin {
        fn encode_by_ref(
            &self,
            buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            <String as Encode<'q, Sqlite>>::encode_by_ref(&self.code, buf)
        }
    }

    impl<'r> Decode<'r, Sqlite> for Gtin {
        fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
            let code = <&str as Decode<'r, Sqlite>>::decode(value)?;
            Ok(Gtin::parse(code)?)
        }
    }
}


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(gtin: &Gtin) -> u64 {
        let mut hasher = DefaultHasher::new();
        gtin.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse_each_format() {
        let cases = [
            ("03485736", GtinFormat::Gtin8),
            ("734092309436", GtinFormat::Gtin12),
            ("0234248273487", GtinFormat::Gtin13),
            ("10614141000415", GtinFormat::Gtin14),
        ];

        for (code, format) in cases {
            let gtin = Gtin::parse(code).unwrap();
            assert_eq!(gtin.format(), format);
            assert_eq!(gtin.length(), format.length());
            assert_eq!(gtin.to_string(), code);
        }
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for bad in [
            "73513536",
            "123456789010",
            "4006381333932",
            "10614141000416",
            "",
            "abcdefgh",
            "012345678",
        ] {
            let err = Gtin::parse(bad).unwrap_err();
            assert!(
                matches!(err, GtinError::InvalidFormat { ref input, .. } if input == bad),
                "unexpected error for {bad:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_without_check_digit() {
        let gtin = Gtin::parse_without_check_digit("400638133393").unwrap();
        assert_eq!(gtin.as_str(), "4006381333931");
        assert_eq!(gtin.format(), GtinFormat::Gtin13);

        let gtin = Gtin::parse_without_check_digit("4012345").unwrap();
        assert_eq!(gtin, Gtin::parse("40123455").unwrap());

        assert_eq!(
            Gtin::parse_without_check_digit("40123455"),
            Err(GtinError::invalid("40123455", Rejection::UnsupportedLength(8)))
        );
        assert!(Gtin::parse_without_check_digit("4OO638133393").is_err());
    }

    #[test]
    fn test_accessors() {
        let gtin = Gtin::parse("4006381333931").unwrap();
        assert_eq!(gtin.check_digit(), 1);
        assert_eq!(gtin.digit_at(0), Ok(4));
        assert_eq!(gtin.digit_at(3), Ok(6));
        assert_eq!(gtin.digit_at(12), Ok(1));
        assert_eq!(gtin.payload(), "400638133393");
        assert_eq!(
            gtin.digits().collect::<Vec<_>>(),
            vec![4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3, 1]
        );
    }

    #[test]
    fn test_digit_at_out_of_range() {
        let gtin = Gtin::parse("40123455").unwrap();
        assert_eq!(
            gtin.digit_at(100),
            Err(GtinError::IndexOutOfRange {
                position: 100,
                length: 8
            })
        );
        assert!(gtin.digit_at(8).is_err());
        assert!(gtin.digit_at(7).is_ok());
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Gtin::parse("10614141000415").unwrap();
        let b = Gtin::parse("10614141000415").unwrap();
        let c = Gtin::parse("34957354738950").unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);

        let set: HashSet<Gtin> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_leading_zeros_are_significant() {
        let gtin12 = Gtin::parse("012345678905").unwrap();
        let gtin13 = Gtin::parse("0012345678905").unwrap();
        assert_ne!(gtin12, gtin13);
        assert_eq!(gtin12.format(), GtinFormat::Gtin12);
        assert_eq!(gtin13.format(), GtinFormat::Gtin13);
    }

    #[test]
    fn test_eq_str() {
        let gtin = Gtin::parse("40123455").unwrap();
        assert!(gtin.eq_str("40123455"));
        assert!(!gtin.eq_str("040123455"));
        assert!(!gtin.eq_str(" 40123455"));
        assert!(gtin == "40123455");
        assert!(gtin != "40123456");
    }

    #[test]
    fn test_string_conversions() {
        let gtin: Gtin = "734092309436".parse().unwrap();
        assert_eq!(gtin.as_ref(), "734092309436");

        let gtin = Gtin::try_from("734092309436".to_string()).unwrap();
        let back: String = gtin.into();
        assert_eq!(back, "734092309436");

        assert!(Gtin::try_from("734092309437").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let gtin = Gtin::parse("4006381333931").unwrap();
        let json = serde_json::to_string(&gtin).unwrap();
        assert_eq!(json, "\"4006381333931\"");

        let parsed: Gtin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, gtin);
        assert_eq!(parsed.format(), GtinFormat::Gtin13);
    }

    #[test]
    fn test_serde_rejects_invalid_code() {
        assert!(serde_json::from_str::<Gtin>("\"4006381333932\"").is_err());
        assert!(serde_json::from_str::<Gtin>("4006381333931").is_err());
    }

    #[test]
    fn test_gtin_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gtin>();
        assert_send_sync::<GtinFormat>();
    }
}

//! # GTIN Formats
//!
//! The closed catalog of supported GTIN formats.
//!
//! ## Format Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Variant   Name      Identifier  Length  Symbology  Typical use         │
//! │  ───────   ───────   ──────────  ──────  ─────────  ─────────────────   │
//! │  Gtin8     GTIN-8    GTIN_8         8    EAN-8      very small packs    │
//! │  Gtin12    GTIN-12   GTIN_12       12    UPC-A      North American POS  │
//! │  Gtin13    GTIN-13   GTIN_13       13    EAN-13     supermarkets        │
//! │  Gtin14    GTIN-14   GTIN_14       14    EAN-14     cases, traded units │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only thing that distinguishes one format from another is its digit
//! count; the checksum is the same for all four.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::FormatError;

/// A GTIN format.
///
/// ## Serialization
/// Serialized as its display name (`"GTIN-13"`), both in JSON and, with the
/// `sqlx` feature, in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum GtinFormat {
    /// GTIN-8, EAN-8. The short version of EAN-13 for extremely small products.
    #[serde(rename = "GTIN-8")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "GTIN-8"))]
    Gtin8,
    /// GTIN-12, UPC-A. Standard version of the UPC code.
    #[serde(rename = "GTIN-12")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "GTIN-12"))]
    Gtin12,
    /// GTIN-13, EAN-13. Used in supermarkets to identify products at the
    /// point of sale.
    #[serde(rename = "GTIN-13")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "GTIN-13"))]
    Gtin13,
    /// GTIN-14, EAN-14. Commonly used for traded goods (cases, pallets).
    #[serde(rename = "GTIN-14")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "GTIN-14"))]
    Gtin14,
}

/// Every format, in declaration order.
const ALL_FORMATS: [GtinFormat; 4] = [
    GtinFormat::Gtin8,
    GtinFormat::Gtin12,
    GtinFormat::Gtin13,
    GtinFormat::Gtin14,
];

impl GtinFormat {
    /// All formats: GTIN-8, GTIN-12, GTIN-13, GTIN-14 (in that order).
    #[inline]
    pub const fn all() -> &'static [GtinFormat] {
        &ALL_FORMATS
    }

    /// Number of supported formats.
    #[inline]
    pub const fn count() -> usize {
        ALL_FORMATS.len()
    }

    /// Number of digits in a complete code of this format.
    #[inline]
    pub const fn length(self) -> usize {
        match self {
            GtinFormat::Gtin8 => 8,
            GtinFormat::Gtin12 => 12,
            GtinFormat::Gtin13 => 13,
            GtinFormat::Gtin14 => 14,
        }
    }

    /// Number of digits before the check digit.
    #[inline]
    pub const fn payload_length(self) -> usize {
        self.length() - 1
    }

    /// Canonical display name, e.g. `"GTIN-12"`.
    pub const fn name(self) -> &'static str {
        match self {
            GtinFormat::Gtin8 => "GTIN-8",
            GtinFormat::Gtin12 => "GTIN-12",
            GtinFormat::Gtin13 => "GTIN-13",
            GtinFormat::Gtin14 => "GTIN-14",
        }
    }

    /// Constant-style identifier, e.g. `"GTIN_12"`.
    pub const fn identifier(self) -> &'static str {
        match self {
            GtinFormat::Gtin8 => "GTIN_8",
            GtinFormat::Gtin12 => "GTIN_12",
            GtinFormat::Gtin13 => "GTIN_13",
            GtinFormat::Gtin14 => "GTIN_14",
        }
    }

    /// Barcode symbology that usually carries this format.
    pub const fn symbology(self) -> &'static str {
        match self {
            GtinFormat::Gtin8 => "EAN-8",
            GtinFormat::Gtin12 => "UPC-A",
            GtinFormat::Gtin13 => "EAN-13",
            GtinFormat::Gtin14 => "EAN-14",
        }
    }

    /// Looks a format up by name.
    ///
    /// Matching is exact and case-sensitive. Both the display name
    /// (`"GTIN-13"`) and the identifier (`"GTIN_13"`) are accepted.
    ///
    /// ## Example
    /// ```rust
    /// use gtin_core::GtinFormat;
    ///
    /// assert_eq!(GtinFormat::for_name("GTIN-13").unwrap(), GtinFormat::Gtin13);
    /// assert_eq!(GtinFormat::for_name("GTIN_8").unwrap(), GtinFormat::Gtin8);
    /// assert!(GtinFormat::for_name("gtin-13").is_err());
    /// ```
    pub fn for_name(name: &str) -> Result<GtinFormat, FormatError> {
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| format.name() == name || format.identifier() == name)
            .ok_or_else(|| FormatError::UnknownFormatName(name.to_string()))
    }

    /// Looks a format up by digit count.
    ///
    /// ## Example
    /// ```rust
    /// use gtin_core::GtinFormat;
    ///
    /// assert_eq!(GtinFormat::for_length(13).unwrap(), GtinFormat::Gtin13);
    /// assert!(GtinFormat::for_length(9).is_err());
    /// ```
    pub fn for_length(length: usize) -> Result<GtinFormat, FormatError> {
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| format.length() == length)
            .ok_or(FormatError::UnknownFormatLength(length))
    }

    /// Format whose payload (code without check digit) has this many digits.
    pub(crate) fn for_payload_length(length: usize) -> Option<GtinFormat> {
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| format.payload_length() == length)
    }
}

impl fmt::Display for GtinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GtinFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GtinFormat::for_name(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats_in_declaration_order() {
        assert_eq!(
            GtinFormat::all(),
            &[
                GtinFormat::Gtin8,
                GtinFormat::Gtin12,
                GtinFormat::Gtin13,
                GtinFormat::Gtin14
            ]
        );
        assert_eq!(GtinFormat::count(), 4);
    }

    #[test]
    fn test_lengths() {
        let lengths: Vec<usize> = GtinFormat::all().iter().map(|f| f.length()).collect();
        assert_eq!(lengths, vec![8, 12, 13, 14]);
        assert_eq!(GtinFormat::Gtin13.payload_length(), 12);
    }

    #[test]
    fn test_for_length() {
        assert_eq!(GtinFormat::for_length(8), Ok(GtinFormat::Gtin8));
        assert_eq!(GtinFormat::for_length(12), Ok(GtinFormat::Gtin12));
        assert_eq!(GtinFormat::for_length(13), Ok(GtinFormat::Gtin13));
        assert_eq!(GtinFormat::for_length(14), Ok(GtinFormat::Gtin14));

        for bad in [0, 7, 9, 11, 15] {
            assert_eq!(
                GtinFormat::for_length(bad),
                Err(FormatError::UnknownFormatLength(bad))
            );
        }
    }

    #[test]
    fn test_for_payload_length() {
        assert_eq!(GtinFormat::for_payload_length(7), Some(GtinFormat::Gtin8));
        assert_eq!(GtinFormat::for_payload_length(12), Some(GtinFormat::Gtin13));
        assert_eq!(GtinFormat::for_payload_length(8), None);
    }

    #[test]
    fn test_for_name() {
        for format in GtinFormat::all() {
            assert_eq!(GtinFormat::for_name(format.name()), Ok(*format));
            assert_eq!(GtinFormat::for_name(format.identifier()), Ok(*format));
        }

        assert_eq!(
            GtinFormat::for_name("GTIN_15"),
            Err(FormatError::UnknownFormatName("GTIN_15".to_string()))
        );
        // case-sensitive
        assert!(GtinFormat::for_name("gtin-8").is_err());
        assert!(GtinFormat::for_name(" GTIN-8").is_err());
        assert!("EAN-13".parse::<GtinFormat>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GtinFormat::Gtin8.to_string(), "GTIN-8");
        assert_eq!(GtinFormat::Gtin12.to_string(), "GTIN-12");
        assert_eq!(GtinFormat::Gtin13.to_string(), "GTIN-13");
        assert_eq!(GtinFormat::Gtin14.to_string(), "GTIN-14");
        assert_eq!("GTIN-12".parse::<GtinFormat>(), Ok(GtinFormat::Gtin12));
    }

    #[test]
    fn test_symbology() {
        assert_eq!(GtinFormat::Gtin12.symbology(), "UPC-A");
        assert_eq!(GtinFormat::Gtin13.symbology(), "EAN-13");
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&GtinFormat::Gtin13).unwrap();
        assert_eq!(json, "\"GTIN-13\"");

        let format: GtinFormat = serde_json::from_str("\"GTIN-14\"").unwrap();
        assert_eq!(format, GtinFormat::Gtin14);
    }
}

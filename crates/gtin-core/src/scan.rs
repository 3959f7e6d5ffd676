//! # Scan Interpretation
//!
//! Decides whether a line of scanner or search-box input is a barcode.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw input "4006381333931\r\n"                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim (if config.trim_input)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Barcode-shaped? (only digits, 7-14 long)                              │
//! │       │                                                                 │
//! │       ├── NO  → Text("...")        free-text product search            │
//! │       │                                                                 │
//! │       ├── valid GTIN, accepted format  → Barcode(gtin)                 │
//! │       │                                                                 │
//! │       ├── completion on, length+1 accepted → Completed(gtin)           │
//! │       │                                                                 │
//! │       └── otherwise → Err(InvalidFormat)   "Bad scan, try again"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::config::ScanConfig;
use crate::error::{GtinError, GtinResult, Rejection};
use crate::format::GtinFormat;
use crate::gtin::Gtin;
use crate::{MAX_GTIN_LENGTH, MIN_PAYLOAD_LENGTH};

/// What a line of input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A complete, valid GTIN.
    Barcode(Gtin),
    /// A payload that was completed with its check digit.
    Completed(Gtin),
    /// Not barcode-shaped; use it as a search query (already trimmed).
    Text(String),
}

impl ScanOutcome {
    /// The GTIN, if the input was one.
    pub fn gtin(&self) -> Option<&Gtin> {
        match self {
            ScanOutcome::Barcode(gtin) | ScanOutcome::Completed(gtin) => Some(gtin),
            ScanOutcome::Text(_) => None,
        }
    }
}

/// Only digits, and long enough to be a payload but no longer than a GTIN-14.
fn is_barcode_shaped(input: &str) -> bool {
    (MIN_PAYLOAD_LENGTH..=MAX_GTIN_LENGTH).contains(&input.len())
        && input.bytes().all(|b| b.is_ascii_digit())
}

/// Interprets raw scanner or search-box input.
///
/// ## Example
/// ```rust
/// use gtin_core::scan::{read_scan, ScanOutcome};
/// use gtin_core::ScanConfig;
///
/// let config = ScanConfig::default();
///
/// let outcome = read_scan("4006381333931\r\n", &config).unwrap();
/// assert_eq!(outcome.gtin().unwrap().as_str(), "4006381333931");
///
/// let outcome = read_scan("cola", &config).unwrap();
/// assert_eq!(outcome, ScanOutcome::Text("cola".to_string()));
///
/// assert!(read_scan("4006381333932", &config).is_err());
/// ```
///
/// ## Errors
/// - `GtinError::InvalidConfig` if the configuration accepts no format
/// - `GtinError::InvalidFormat` if the input is barcode-shaped but not an
///   accepted GTIN
pub fn read_scan(raw: &str, config: &ScanConfig) -> GtinResult<ScanOutcome> {
    config.validate()?;

    let input = if config.trim_input { raw.trim() } else { raw };

    if !is_barcode_shaped(input) {
        debug!(len = input.len(), "Scan is free text");
        return Ok(ScanOutcome::Text(input.to_string()));
    }

    let parsed = Gtin::parse(input);
    if let Ok(gtin) = &parsed {
        if config.accepts(gtin.format()) {
            debug!(gtin = %gtin, format = %gtin.format(), "Scan is a barcode");
            return Ok(ScanOutcome::Barcode(gtin.clone()));
        }
    }

    if config.complete_check_digit {
        let completes_accepted = GtinFormat::for_length(input.len() + 1)
            .map(|format| config.accepts(format))
            .unwrap_or(false);

        if completes_accepted {
            let gtin = Gtin::parse_without_check_digit(input)?;
            debug!(gtin = %gtin, format = %gtin.format(), "Completed scan with check digit");
            return Ok(ScanOutcome::Completed(gtin));
        }
    }

    debug!(input = %input, "Rejected scan");
    match parsed {
        Err(err) => Err(err),
        // Valid, but this register does not take the format.
        Ok(_) => Err(GtinError::invalid(
            input,
            Rejection::UnsupportedLength(input.len()),
        )),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

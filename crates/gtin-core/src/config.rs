//! # Scan Configuration
//!
//! Register-side policy for interpreting scanner and search-box input.
//!
//! The host application loads this from wherever it keeps settings (config
//! file, database, frontend) and passes it to [`crate::scan::read_scan`].
//! It is read-only after loading, so it can be shared across threads freely.
//!
//! ## JSON Shape
//! ```json
//! {
//!   "acceptedFormats": ["GTIN-8", "GTIN-12", "GTIN-13"],
//!   "trimInput": true,
//!   "completeCheckDigit": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{GtinError, GtinResult};
use crate::format::GtinFormat;

/// How raw scanner input is turned into a GTIN.
///
/// ## Fields
/// Missing fields take their default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ScanConfig {
    /// Formats the register accepts.
    /// Default: all four.
    pub accepted_formats: Vec<GtinFormat>,

    /// Strip leading/trailing whitespace (scanners often send CR/LF as a
    /// suffix). Interior whitespace is never removed.
    /// Default: true
    pub trim_input: bool,

    /// Accept a code typed without its check digit and complete it.
    /// Default: false
    pub complete_check_digit: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            accepted_formats: GtinFormat::all().to_vec(),
            trim_input: true,
            complete_check_digit: false,
        }
    }
}

impl ScanConfig {
    /// Returns `true` if codes of `format` are accepted.
    pub fn accepts(&self, format: GtinFormat) -> bool {
        self.accepted_formats.contains(&format)
    }

    /// Checks that the configuration can accept anything at all.
    ///
    /// ## Errors
    /// `GtinError::InvalidConfig` if `accepted_formats` is empty.
    pub fn validate(&self) -> GtinResult<()> {
        if self.accepted_formats.is_empty() {
            return Err(GtinError::InvalidConfig {
                reason: "acceptedFormats must list at least one format".to_string(),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! User settings for freee-receipts
//!
//! Holds the business constants written into every ledger row, the rule that
//! classifies digital-book purchases, the markers of annotation rows, and the
//! output file name pattern. Defaults reproduce the single-vendor setup the
//! tool was built for, so a missing settings file changes nothing.

use std::fmt::Write as _;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::ReceiptPaths;
use crate::error::ReceiptError;
use crate::models::FlowDirection;

/// Fixed values written into every ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConstants {
    /// 収支区分
    pub flow: FlowDirection,
    /// 取引先 (vendor name)
    pub counterparty: String,
    /// 税区分
    pub tax_section: String,
    /// 税計算区分
    pub tax_calculation: String,
    /// 品目
    pub item_kind: String,
    /// 決済口座
    pub settlement_account: String,
}

impl Default for LedgerConstants {
    fn default() -> Self {
        Self {
            flow: FlowDirection::Expense,
            counterparty: "Amazon".to_string(),
            tax_section: "課対仕入10%".to_string(),
            tax_calculation: "内税".to_string(),
            item_kind: "Amazon".to_string(),
            settlement_account: "事業主借".to_string(),
        }
    }
}

/// Rule for spotting digital-book purchases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    /// Prefix of the attribute column that marks a digital edition
    pub digital_book_marker: String,
    /// Memo tag added to digital-book rows
    pub digital_book_tag: String,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            digital_book_marker: "[Kindle 版]".to_string(),
            digital_book_tag: "Kindle".to_string(),
        }
    }
}

/// Bracket pair wrapping the names of annotation rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseMarkers {
    pub open: String,
    pub close: String,
}

impl Default for NoiseMarkers {
    fn default() -> Self {
        Self {
            open: "（".to_string(),
            close: "）".to_string(),
        }
    }
}

/// User settings for freee-receipts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Constants written into every ledger row
    #[serde(default)]
    pub ledger: LedgerConstants,

    /// Digital-book classification rule
    #[serde(default)]
    pub classification: Classification,

    /// Annotation row markers
    #[serde(default)]
    pub noise: NoiseMarkers,

    /// Output file name (strftime pattern, formatted with the run date)
    #[serde(default = "default_output_file_pattern")]
    pub output_file_pattern: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_output_file_pattern() -> String {
    "freee-%Y-%m-%d.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger: LedgerConstants::default(),
            classification: Classification::default(),
            noise: NoiseMarkers::default(),
            output_file_pattern: default_output_file_pattern(),
        }
    }
}

impl Settings {
    /// Load settings from the resolved config directory
    ///
    /// Without a resolvable config directory (no `HOME`, e.g. under cron)
    /// there is no settings file to read, so the defaults apply.
    pub fn load_default() -> Result<Self, ReceiptError> {
        match ReceiptPaths::new() {
            Ok(paths) => Self::load_or_default(&paths),
            Err(e) => {
                debug!("No config directory ({}), using default settings", e);
                Ok(Settings::default())
            }
        }
    }

    /// Load settings from the default location, or fall back to defaults
    /// if the file doesn't exist
    pub fn load_or_default(paths: &ReceiptPaths) -> Result<Self, ReceiptError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            // Don't write anything; defaults are the documented behavior
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ReceiptError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReceiptError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ReceiptError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self, paths: &ReceiptPaths) -> Result<(), ReceiptError> {
        paths.ensure_directories()?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, settings_path: &Path) -> Result<(), ReceiptError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReceiptError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(settings_path, contents).map_err(|e| {
            ReceiptError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.noise.open.is_empty() || self.noise.close.is_empty() {
            return Err(ReceiptError::Config("Noise markers must not be empty".into()));
        }
        if self.classification.digital_book_marker.is_empty() {
            return Err(ReceiptError::Config("Digital book marker must not be empty".into()));
        }
        if StrftimeItems::new(&self.output_file_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ReceiptError::Config(format!(
                "Invalid output file pattern: {}",
                self.output_file_pattern
            )));
        }
        Ok(())
    }

    /// Output file name for a run on `date`
    pub fn output_file_name(&self, date: NaiveDate) -> Result<String, ReceiptError> {
        self.validate()?;

        let mut name = String::new();
        write!(name, "{}", date.format(&self.output_file_pattern)).map_err(|_| {
            ReceiptError::Config(format!(
                "Output file pattern cannot be formatted with a date: {}",
                self.output_file_pattern
            ))
        })?;

        if name.trim().is_empty() {
            return Err(ReceiptError::Config("Output file name is empty".into()));
        }
        Ok(name)
    }
}

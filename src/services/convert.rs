//! Receipt conversion pipeline
//!
//! Runs input files through decode, noise filtering and selection, maps the
//! chosen receipts and writes a single dated freee import file. Every failure
//! is returned to the caller; nothing is written unless all inputs were read,
//! selected and mapped successfully.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::{format_receipt_label, format_receipt_preview};
use crate::error::{ReceiptError, ReceiptResult};
use crate::export::export_ledger_csv;
use crate::models::{LedgerRecord, Receipt};

use super::filter::filter_noise;
use super::import::read_receipts;
use super::mapper::LedgerMapper;
use super::select::Selector;

/// Result of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Path of the written import file
    pub output_path: PathBuf,
    /// Records written, in output order
    pub records: Vec<LedgerRecord>,
}

/// Service driving the whole conversion
pub struct ConvertService<'a> {
    settings: &'a Settings,
}

impl<'a> ConvertService<'a> {
    /// Create a new convert service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Offer the candidates of one file to the selector
    pub fn select_receipts(
        &self,
        source: &str,
        receipts: Vec<Receipt>,
        selector: &mut dyn Selector,
    ) -> ReceiptResult<Vec<Receipt>> {
        let candidates = filter_noise(&receipts, &self.settings.noise);
        debug!(
            source,
            rows = receipts.len(),
            candidates = candidates.len(),
            "filtered annotation rows"
        );

        selector.set_source(source);
        let chosen = selector.select(
            candidates.len(),
            &|i: usize| format_receipt_label(&candidates[i]),
            &|i: usize| format_receipt_preview(&candidates[i]),
        )?;

        let mut selected = Vec::with_capacity(chosen.len());
        for index in chosen {
            let receipt = candidates.get(index).ok_or_else(|| {
                ReceiptError::Selection(format!(
                    "Selector returned index {} but only {} candidates exist",
                    index,
                    candidates.len()
                ))
            })?;
            selected.push(receipt.clone());
        }

        info!(source, selected = selected.len(), "receipts selected");
        Ok(selected)
    }

    /// Decode, filter and select the receipts of one file
    pub fn load(&self, path: &Path, selector: &mut dyn Selector) -> ReceiptResult<Vec<Receipt>> {
        let receipts = read_receipts(path)?;
        self.select_receipts(&path.display().to_string(), receipts, selector)
    }

    /// Load every file in order and combine the selections
    pub fn collect(
        &self,
        paths: &[PathBuf],
        selector: &mut dyn Selector,
    ) -> ReceiptResult<Vec<Receipt>> {
        let mut selected = Vec::new();
        for path in paths {
            selected.extend(self.load(path, selector)?);
        }
        Ok(selected)
    }

    /// Map receipts to ledger records
    pub fn convert(&self, receipts: &[Receipt]) -> ReceiptResult<Vec<LedgerRecord>> {
        let mapper = LedgerMapper::new(&self.settings.ledger, &self.settings.classification);
        mapper.map_all(receipts)
    }

    /// Path of the import file for a run on `date`
    pub fn output_path(&self, output_dir: &Path, date: NaiveDate) -> ReceiptResult<PathBuf> {
        Ok(output_dir.join(self.settings.output_file_name(date)?))
    }

    /// Write records to the import file, replacing any existing file
    pub fn write(&self, records: &[LedgerRecord], path: &Path) -> ReceiptResult<()> {
        let file = File::create(path).map_err(|e| {
            ReceiptError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;

        export_ledger_csv(records, BufWriter::new(file))?;

        info!(path = %path.display(), records = records.len(), "import file written");
        Ok(())
    }

    /// Run the full pipeline
    pub fn run(
        &self,
        paths: &[PathBuf],
        selector: &mut dyn Selector,
        output_dir: &Path,
        date: NaiveDate,
    ) -> ReceiptResult<ConversionReport> {
        // Resolve the name first so a bad pattern fails before any prompting
        let output_path = self.output_path(output_dir, date)?;

        let selected = self.collect(paths, selector)?;
        let records = self.convert(&selected)?;
        self.write(&records, &output_path)?;

        Ok(ConversionReport {
            output_path,
            records,
        })
    }
}

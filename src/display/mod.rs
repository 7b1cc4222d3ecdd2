//! Display formatting for terminal output
//!
//! Provides the selector's label and preview text and the summary printed
//! after an import file is written.

pub mod ledger;
pub mod receipt;

pub use ledger::{format_export_summary, format_yen};
pub use receipt::{format_receipt_label, format_receipt_preview};

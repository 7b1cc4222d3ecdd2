//! Export module for freee-receipts
//!
//! Serializes ledger records into freee's CSV import format.

pub mod csv;

pub use self::csv::export_ledger_csv;

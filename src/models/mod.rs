//! Data models for freee-receipts
//!
//! `Receipt` is the input side (vendor order-history rows), `LedgerRecord`
//! the output side (freee import rows).

pub mod ledger;
pub mod receipt;

pub use ledger::{ExpenseAccount, FlowDirection, LedgerRecord};
pub use receipt::Receipt;

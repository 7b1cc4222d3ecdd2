//! Configuration module for freee-receipts
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Business constants used by the ledger mapping
//! - Noise-row markers and the output file pattern

pub mod paths;
pub mod settings;

pub use paths::ReceiptPaths;
pub use settings::{Classification, LedgerConstants, NoiseMarkers, Settings};

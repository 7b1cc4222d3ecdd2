//! freee-receipts - convert purchase receipts into freee import files
//!
//! This library reads order-history CSV exports, lets the operator pick the
//! purchases to book, and writes them as expense entries in freee's CSV
//! import format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Receipt and ledger record models
//! - `services`: Decoding, filtering, selection, mapping and the pipeline
//! - `export`: CSV writer for ledger records
//! - `display`: Text formatting for the finder and the run summary
//! - `tui`: Interactive receipt finder
//!
//! # Example
//!
//! ```rust,ignore
//! use freee_receipts::config::Settings;
//! use freee_receipts::services::{ConvertService, SelectAll};
//!
//! let settings = Settings::default();
//! let service = ConvertService::new(&settings);
//! let report = service.run(&paths, &mut SelectAll, Path::new("."), today)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{ReceiptError, ReceiptResult};

//! Service layer for freee-receipts
//!
//! The service layer holds the conversion logic: decoding receipt exports,
//! dropping annotation rows, selection, ledger mapping, and the pipeline
//! that ties them together.

pub mod convert;
pub mod filter;
pub mod import;
pub mod mapper;
pub mod select;

pub use convert::{ConversionReport, ConvertService};
pub use filter::filter_noise;
pub use import::{decode_receipts, read_receipts, skip_bom, UTF8_BOM};
pub use mapper::LedgerMapper;
pub use select::{SelectAll, Selector};

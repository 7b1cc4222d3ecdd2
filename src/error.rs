//! Custom error types for freee-receipts
//!
//! This module defines the error hierarchy for the converter using thiserror
//! for ergonomic error definitions. Every component returns these errors up to
//! the binary's `main`, which is the only place a failure ends the process.

use thiserror::Error;

/// The main error type for freee-receipts operations
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV or a value that does not fit its column type
    #[error("Decode error: {0}")]
    Decode(String),

    /// A receipt is missing a value the ledger mapping requires
    #[error("Receipt {order_no} has no {field}")]
    MissingField {
        order_no: String,
        field: &'static str,
    },

    /// `count * price` does not fit in an i64
    #[error("Amount overflow for receipt {order_no}: {count} * {price}")]
    AmountOverflow {
        order_no: String,
        count: i64,
        price: i64,
    },

    /// The operator cancelled the interactive selection
    #[error("Selection aborted")]
    SelectionAborted,

    /// The selection surface itself failed
    #[error("Selection error: {0}")]
    Selection(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReceiptError {
    /// Create a "missing field" error for a receipt
    pub fn missing_field(order_no: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            order_no: order_no.into(),
            field,
        }
    }

    /// Check if this is a mapper precondition failure
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if the operator cancelled the selection
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::SelectionAborted)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReceiptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ReceiptError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Decode(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for freee-receipts operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;

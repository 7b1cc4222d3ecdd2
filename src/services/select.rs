//! Receipt selection
//!
//! Choosing which receipts end up in the ledger is delegated to a
//! [`Selector`], so the pipeline runs the same with the interactive finder,
//! with `--all`, or with a scripted selector in tests.

use crate::error::ReceiptResult;

/// Picks a subset of candidates
///
/// Implementations receive the number of candidates plus functions producing
/// each candidate's one-line label and multi-line preview, and return the
/// chosen indices in ascending order.
pub trait Selector {
    /// Called before candidates from a new source are offered
    fn set_source(&mut self, _source: &str) {}

    fn select(
        &mut self,
        count: usize,
        label: &dyn Fn(usize) -> String,
        preview: &dyn Fn(usize) -> String,
    ) -> ReceiptResult<Vec<usize>>;
}

/// Selects every candidate without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl Selector for SelectAll {
    fn select(
        &mut self,
        count: usize,
        _label: &dyn Fn(usize) -> String,
        _preview: &dyn Fn(usize) -> String,
    ) -> ReceiptResult<Vec<usize>> {
        Ok((0..count).collect())
    }
}

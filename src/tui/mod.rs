//! Terminal User Interface module
//!
//! The interactive receipt finder: a fuzzy-filtered multi-select list with a
//! preview pane, built on ratatui and crossterm.

pub mod event;
pub mod finder;
pub mod layout;
pub mod terminal;
pub mod views;

pub use finder::{fuzzy_match, FinderOutcome, FinderState, FuzzyFinder};

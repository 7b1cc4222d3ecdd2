//! Layout definitions for the TUI
//!
//! The finder screen: candidate list on the left, preview on the right,
//! query prompt and key hints along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the finder
pub struct FinderLayout {
    /// Candidate list
    pub list: Rect,
    /// Preview of the candidate under the cursor
    pub preview: Rect,
    /// Query prompt line
    pub prompt: Rect,
    /// Key hints line
    pub hints: Rect,
}

impl FinderLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // List and preview
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[0]);

        Self {
            list: horizontal[0],
            preview: horizontal[1],
            prompt: vertical[1],
            hints: vertical[2],
        }
    }
}

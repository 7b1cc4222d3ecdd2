//! Fuzzy multi-select finder
//!
//! [`FinderState`] holds the query, the matching candidates, the cursor and
//! the marked set; it has no terminal dependency. [`FuzzyFinder`] drives it
//! from crossterm key events and renders it with ratatui.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{ReceiptError, ReceiptResult};
use crate::services::Selector;

use super::event::{Event, EventReader};
use super::terminal::{init_terminal, restore_terminal, Tui};

/// How a finder session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderOutcome {
    /// Chosen candidate indices, ascending
    Accepted(Vec<usize>),
    /// The operator cancelled
    Aborted,
}

/// Case-insensitive subsequence match
pub fn fuzzy_match(query: &str, label: &str) -> bool {
    let mut haystack = label.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| haystack.any(|c| c == q))
}

/// State of a finder session
#[derive(Debug, Clone)]
pub struct FinderState {
    labels: Vec<String>,
    query: String,
    /// Candidate indices matching the query, in candidate order
    matches: Vec<usize>,
    /// Position within `matches`
    cursor: usize,
    marked: BTreeSet<usize>,
    outcome: Option<FinderOutcome>,
}

impl FinderState {
    pub fn new(labels: Vec<String>) -> Self {
        let matches = (0..labels.len()).collect();
        Self {
            labels,
            query: String::new(),
            matches,
            cursor: 0,
            marked: BTreeSet::new(),
            outcome: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn total(&self) -> usize {
        self.labels.len()
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidate index under the cursor
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    pub fn outcome(&self) -> Option<&FinderOutcome> {
        self.outcome.as_ref()
    }

    /// Append a character to the query
    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_matches();
    }

    /// Delete the last query character
    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.refresh_matches();
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh_matches();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.matches.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the mark on the current candidate and advance
    pub fn toggle_mark(&mut self) {
        if let Some(index) = self.current() {
            if !self.marked.remove(&index) {
                self.marked.insert(index);
            }
            self.move_down();
        }
    }

    /// Finish with the marked candidates, or the current one if none are marked
    pub fn accept(&mut self) {
        let chosen = if self.marked.is_empty() {
            self.current().into_iter().collect()
        } else {
            self.marked.iter().copied().collect()
        };
        self.outcome = Some(FinderOutcome::Accepted(chosen));
    }

    pub fn abort(&mut self) {
        self.outcome = Some(FinderOutcome::Aborted);
    }

    /// Apply a key press. Returns true if the key was handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.abort(),
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.abort(),
            KeyCode::Enter => self.accept(),
            KeyCode::Up => self.move_up(),
            KeyCode::Char('p') | KeyCode::Char('k') if ctrl => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('n') | KeyCode::Char('j') if ctrl => self.move_down(),
            KeyCode::Tab => self.toggle_mark(),
            KeyCode::BackTab => {
                if let Some(index) = self.current() {
                    if !self.marked.remove(&index) {
                        self.marked.insert(index);
                    }
                }
                self.move_up();
            }
            KeyCode::Char('u') if ctrl => self.clear_query(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            _ => return false,
        }

        true
    }

    fn refresh_matches(&mut self) {
        let query = &self.query;
        self.matches = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| fuzzy_match(query, label))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }
}

/// Interactive selector backed by the terminal
#[derive(Debug, Clone)]
pub struct FuzzyFinder {
    /// Title shown above the candidate list
    title: String,
}

impl FuzzyFinder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Set the list title, e.g. to the file being processed
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn run(
        &self,
        terminal: &mut Tui,
        state: &mut FinderState,
        preview: &dyn Fn(usize) -> String,
    ) -> std::io::Result<()> {
        let events = EventReader;

        while state.outcome().is_none() {
            let preview_text = state.current().map(preview).unwrap_or_default();
            terminal.draw(|frame| {
                super::views::render(frame, state, &self.title, &preview_text);
            })?;

            match events.next()? {
                Event::Key(key) => {
                    state.handle_key(key);
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next iteration
                }
            }
        }

        Ok(())
    }
}

/// Combine the run loop and restore results; a run failure outranks a
/// restore failure
fn finish_session(result: std::io::Result<()>, restored: std::io::Result<()>) -> ReceiptResult<()> {
    result.map_err(|e| ReceiptError::Selection(e.to_string()))?;
    restored.map_err(|e| ReceiptError::Selection(format!("Failed to restore terminal: {}", e)))
}

impl Default for FuzzyFinder {
    fn default() -> Self {
        Self::new("Receipts")
    }
}

impl Selector for FuzzyFinder {
    fn set_source(&mut self, source: &str) {
        self.set_title(source);
    }

    fn select(
        &mut self,
        count: usize,
        label: &dyn Fn(usize) -> String,
        preview: &dyn Fn(usize) -> String,
    ) -> ReceiptResult<Vec<usize>> {
        let mut state = FinderState::new((0..count).map(label).collect());

        let mut terminal = init_terminal()
            .map_err(|e| ReceiptError::Selection(format!("Failed to open terminal: {}", e)))?;

        let result = self.run(&mut terminal, &mut state, preview);

        // Restore before reporting so the message lands on a sane terminal
        let restored = restore_terminal();
        finish_session(result, restored)?;

        match state.outcome() {
            Some(FinderOutcome::Accepted(chosen)) => Ok(chosen.clone()),
            _ => Err(ReceiptError::SelectionAborted),
        }
    }
}

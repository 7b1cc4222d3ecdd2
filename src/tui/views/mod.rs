//! Finder rendering
//!
//! Draws the finder state: candidate list with marks and cursor, preview
//! pane, query prompt and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::finder::FinderState;
use super::layout::FinderLayout;

/// Render the whole finder screen
pub fn render(frame: &mut Frame, state: &FinderState, title: &str, preview: &str) {
    let layout = FinderLayout::new(frame.area());

    render_list(frame, state, title, layout.list);
    render_preview(frame, preview, layout.preview);
    render_prompt(frame, state, layout.prompt);
    render_hints(frame, layout.hints);
}

/// Render the candidate list
fn render_list(frame: &mut Frame, state: &FinderState, title: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.matches().is_empty() {
        let text = Paragraph::new("No matching receipts")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = state
        .matches()
        .iter()
        .map(|&index| {
            let (mark, style) = if state.is_marked(index) {
                ("● ", Style::default().fg(Color::Green))
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Green)),
                Span::styled(state.label(index).to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor()));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the preview pane
fn render_preview(frame: &mut Frame, preview: &str, area: Rect) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(preview.to_string())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the query prompt with match counters
fn render_prompt(frame: &mut Frame, state: &FinderState, area: Rect) {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(state.query().to_string(), Style::default().fg(Color::White)),
        Span::styled(" ", Style::default().bg(Color::Cyan)),
    ];

    if state.query().is_empty() {
        spans.push(Span::styled(
            " (type to filter)",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        format!(
            "  {}/{}  marked {}",
            state.matches().len(),
            state.total(),
            state.marked_count()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render key hints
fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Move  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Mark  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Accept  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

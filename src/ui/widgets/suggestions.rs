// src/ui/widgets/suggestions.rs

use crate::app::{App, AppState, SUGGESTIONS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the suggestion chips. The highlighted chip is the one `Tab` last
/// copied into the input.
pub fn render_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Suggestions (Tab / Shift+Tab)");

    let dimmed = !matches!(app.state, AppState::Idle);
    let mut spans = Vec::with_capacity(SUGGESTIONS.len() * 2);
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        let style = if app.selected_suggestion == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Gray).bold()
        } else if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}]", suggestion), style));
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(chips, area);
}

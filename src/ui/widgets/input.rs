// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState};

const PLACEHOLDER: &str = "Enter a website URL (e.g., https://example.com)";

/// Renders the URL input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default().borders(Borders::ALL).title("Website URL");
    let input_paragraph = if app.input.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(input_paragraph.block(input_block), area);

    // The cursor is only meaningful while the user can type.
    if let AppState::Idle = app.state {
        let typed = app.input.chars().count() as u16;
        frame.set_cursor_position((area.x + typed + 1, area.y + 1));
    }
}

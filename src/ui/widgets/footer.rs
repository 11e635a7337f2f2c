// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer, which lists the keys available in the current state.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |label: &'static str| Span::styled(label, Style::new().bold().fg(Color::Yellow));
    let spans = match app.state {
        AppState::Idle => Line::from(vec![
            key("Enter"),
            Span::raw(" to scan, "),
            key("Tab"),
            Span::raw(" for suggestions, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        AppState::Finished => Line::from(vec![
            key("[N]"),
            Span::raw("ew Scan, "),
            key("↑ ↓"),
            Span::raw(" Scroll, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
        AppState::Scanning => Line::from("Scanning... Press Esc to quit."),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

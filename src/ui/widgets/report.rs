// src/ui/widgets/report.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::knowledge_base::{INSECURE_CONNECTION, NO_FLAWS_DETECTED};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

fn flaw_style(flaw: &str) -> Style {
    if flaw == NO_FLAWS_DETECTED {
        Style::default().fg(Color::Green)
    } else if flaw == INSECURE_CONNECTION {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    }
}

/// Renders the flaw report, or a status message while no report exists.
pub fn render_report(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Detected Flaws (Navigate with ↑ ↓)");

    let result = match (app.state, app.result.as_ref()) {
        (AppState::Finished, Some(result)) => result,
        (AppState::Scanning, _) => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
            let content = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw("Scanning... Please wait."),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
        _ => {
            let content = Paragraph::new("Type a URL or pick a suggestion, then press Enter.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(content.block(main_block), area);
            return;
        }
    };

    let mut lines = Vec::with_capacity(result.flaws.len() + 2);
    if let Some(url) = &app.scanned_url {
        lines.push(Line::from(vec![
            Span::styled("Target: ", Style::default().fg(Color::DarkGray)),
            Span::raw(url.clone()),
        ]));
        lines.push(Line::from(""));
    }
    lines.extend(result.flaws.iter().map(|flaw| {
        Line::from(vec![
            Span::raw("• "),
            Span::styled(flaw.clone(), flaw_style(flaw)),
        ])
    }));

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let report = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.scroll_offset as u16, 0));
    frame.render_widget(report, inner_area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        inner_area,
        &mut app.flaws_scroll_state,
    );
}

// src/ui/widgets/summary.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::status::Tone;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Safe => Color::Green,
        Tone::Caution => Color::Rgb(255, 140, 0),
        Tone::Danger => Color::Red,
    }
}

/// Renders the score panel: the numeric score, its status label and a gauge.
///
/// Nothing but a prompt is drawn until a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Trust Score");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(3), // score and label
            Constraint::Length(1), // gauge
            Constraint::Min(0),
        ])
        .split(area);

    let result = match (app.state, app.result.as_ref()) {
        (AppState::Finished, Some(result)) => result,
        (AppState::Scanning, _) => {
            let spinner = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
            let line = Line::from(format!("{} analysing", spinner)).style(Style::default().fg(Color::Cyan));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), summary_chunks[1]);
            return;
        }
        _ => {
            let prompt = Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", Style::default().bold().fg(Color::Yellow)),
                Span::raw(" to SCAN URL"),
            ]);
            frame.render_widget(Paragraph::new(prompt).alignment(Alignment::Center), summary_chunks[1]);
            return;
        }
    };

    let status = result.status();
    let color = tone_color(status.tone());
    let score_text = Text::from(vec![
        Line::from(format!("{}/10", result.score).bold()).style(Style::default().fg(color)),
        Line::from(""),
        Line::from(status.to_string().bold()).style(Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[1]);

    let score_gauge = Gauge::default()
        .percent(u16::from(result.score) * 10)
        .label("")
        .style(Style::default().fg(color));
    frame.render_widget(score_gauge, summary_chunks[2]);
}

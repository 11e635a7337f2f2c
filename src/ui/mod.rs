// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::suggestions::render_suggestions(frame, app, layout.suggestions);
    widgets::report::render_report(frame, app, layout.report);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine;
    use crate::dispatch::ScanOutcome;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn idle_screen_shows_placeholder_and_suggestions() {
        let mut app = App::new(Duration::ZERO);
        let text = screen_text(&mut app);
        assert!(text.contains("Enter a website URL"));
        assert!(text.contains("https://github.com"));
        assert!(text.contains("SCAN URL"));
    }

    #[test]
    fn finished_screen_shows_score_status_and_flaws() {
        let mut app = App::new(Duration::ZERO);
        app.input = "https://192.168.0.1/login".to_string();
        let request = app.begin_scan().unwrap();
        app.deliver(ScanOutcome {
            token: request.token,
            url: request.url.clone(),
            result: engine::evaluate(&request.url),
        });

        let text = screen_text(&mut app);
        assert!(text.contains("Phishing Suspected"));
        assert!(text.contains("2/10"));
        assert!(text.contains("Suspicious keyword found: 192.168"));
        assert!(text.contains("Suspicious keyword found: login"));
    }

    #[test]
    fn scanning_screen_shows_progress() {
        let mut app = App::new(Duration::ZERO);
        app.input = "https://github.com".to_string();
        app.begin_scan();
        let text = screen_text(&mut app);
        assert!(text.contains("Scanning"));
    }
}

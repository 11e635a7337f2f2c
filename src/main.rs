// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod config;
mod core;
mod dispatch;
mod logging;
mod ui;

use app::{App, AppState};
use config::{Cli, Command, Settings};
use crate::core::models::ScanReport;
use dispatch::ScanOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scan { ref url, json }) => print_report(url, json),
        None => run_tui(Settings::from(&cli)).await,
    }
}

/// Headless mode: score one URL immediately and print the report.
fn print_report(url: &str, json: bool) -> Result<()> {
    let report = ScanReport::new(url, crate::core::engine::evaluate(url));
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

async fn run_tui(settings: Settings) -> Result<()> {
    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), delay_ms = settings.scan_delay.as_millis() as u64, "Starting interactive session.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let outcome = match Terminal::new(CrosstermBackend::new(stdout())) {
        Ok(mut terminal) => event_loop(&mut terminal, settings).await,
        Err(e) => Err(e.into()),
    };

    // --- Restore Terminal ---
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    outcome
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, settings: Settings) -> Result<()> {
    terminal.clear()?;

    let mut app = App::new(settings.scan_delay);
    let (tx, mut rx) = mpsc::channel(4);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }

        while let Ok(outcome) = rx.try_recv() {
            app.deliver(outcome);
        }
        app.on_tick();
    }

    info!("Session closed.");
    Ok(())
}

/// Routes a key press to the handler for the current state.
fn handle_events(app: &mut App, tx: &mpsc::Sender<ScanOutcome>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.quit();
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key.code, tx),
            AppState::Finished => handle_finished_input(app, key.code),
            AppState::Scanning => {
                if key.code == KeyCode::Esc {
                    app.quit();
                }
            }
        }
    }
    Ok(())
}

fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<ScanOutcome>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Tab => app.next_suggestion(),
        KeyCode::BackTab => app.previous_suggestion(),
        KeyCode::Enter => {
            if let Some(request) = app.begin_scan() {
                let handle = dispatch::spawn_scan(request, app.scan_delay, tx.clone());
                app.track(handle);
            }
        }
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

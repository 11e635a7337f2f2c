// src/app.rs

use std::time::Duration;

use ratatui::widgets::ScrollbarState;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::models::ScoreResult;
use crate::dispatch::{RequestToken, ScanOutcome, ScanRequest};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Sample URLs offered as one-key shortcuts under the input box.
pub const SUGGESTIONS: &[&str] = &[
    "https://google.com",
    "https://bit.ly/3example",
    "https://192.168.0.1/login",
    "https://free-prize-now.com",
    "https://github.com",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub selected_suggestion: Option<usize>,
    pub scanned_url: Option<String>,
    pub result: Option<ScoreResult>,
    pub scan_delay: Duration,
    pub spinner_frame: usize,
    pub scroll_offset: usize,
    pub flaws_scroll_state: ScrollbarState,
    last_token: RequestToken,
    in_flight: Option<RequestToken>,
    pending: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(scan_delay: Duration) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            selected_suggestion: None,
            scanned_url: None,
            result: None,
            scan_delay,
            spinner_frame: 0,
            scroll_offset: 0,
            flaws_scroll_state: ScrollbarState::default(),
            last_token: RequestToken::default(),
            in_flight: None,
            pending: None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.selected_suggestion = None;
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.selected_suggestion = None;
    }

    /// Highlights the next suggestion and copies it into the input.
    pub fn next_suggestion(&mut self) {
        let next = match self.selected_suggestion {
            Some(i) => (i + 1) % SUGGESTIONS.len(),
            None => 0,
        };
        self.select_suggestion(next);
    }

    pub fn previous_suggestion(&mut self) {
        let previous = match self.selected_suggestion {
            Some(0) | None => SUGGESTIONS.len() - 1,
            Some(i) => i - 1,
        };
        self.select_suggestion(previous);
    }

    fn select_suggestion(&mut self, index: usize) {
        self.selected_suggestion = Some(index);
        self.input = SUGGESTIONS[index].to_string();
    }

    /// Starts a new scan of the current input.
    ///
    /// Returns `None` while another scan is in flight, once a report is on
    /// screen, or when the input is blank. Otherwise the previous token is
    /// superseded and the new request is returned for dispatch.
    pub fn begin_scan(&mut self) -> Option<ScanRequest> {
        if self.state != AppState::Idle || self.input.trim().is_empty() {
            return None;
        }
        self.last_token = self.last_token.next();
        self.in_flight = Some(self.last_token);
        self.state = AppState::Scanning;
        self.result = None;
        self.scanned_url = None;
        self.spinner_frame = 0;
        info!(token = %self.last_token, url = self.input.as_str(), "Scan requested.");
        Some(ScanRequest {
            token: self.last_token,
            url: self.input.clone(),
        })
    }

    /// Keeps the handle of the task serving the in-flight request so it can
    /// be aborted on reset or quit.
    pub fn track(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.abort();
        }
    }

    /// Applies a finished scan if it belongs to the in-flight request.
    ///
    /// Returns `false` for stale or duplicate outcomes, which are dropped.
    pub fn deliver(&mut self, outcome: ScanOutcome) -> bool {
        if self.in_flight != Some(outcome.token) {
            warn!(token = %outcome.token, "Discarding result of a superseded scan.");
            return false;
        }
        self.in_flight = None;
        self.pending = None;
        self.scanned_url = Some(outcome.url);
        self.result = Some(outcome.result);
        self.state = AppState::Finished;
        self.scroll_offset = 0;
        self.flaws_scroll_state = ScrollbarState::new(self.flaw_count()).position(0);
        true
    }

    pub fn flaw_count(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.flaws.len())
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.flaws_scroll_state = self.flaws_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        let last = self.flaw_count().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(last);
        self.flaws_scroll_state = self.flaws_scroll_state.position(self.scroll_offset);
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Scanning {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.cancel_pending();
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.cancel_pending();
        self.state = AppState::Idle;
        self.input = String::new();
        self.selected_suggestion = None;
        self.scanned_url = None;
        self.result = None;
        self.spinner_frame = 0;
        self.scroll_offset = 0;
        self.flaws_scroll_state = ScrollbarState::default();
    }

    fn cancel_pending(&mut self) {
        self.in_flight = None;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

// src/dispatch.rs

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::engine;
use crate::core::models::ScoreResult;

/// Identifies one scan request. Tokens only ever increase, so a newer request
/// always carries a larger token than any request it supersedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        RequestToken(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A URL waiting to be scored, tagged with the token that owns it.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub token: RequestToken,
    pub url: String,
}

/// A finished scan, tagged with the token of the request that started it.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub token: RequestToken,
    pub url: String,
    pub result: ScoreResult,
}

/// Scores `request.url` on a background task after `delay` and sends the
/// outcome through `tx`.
///
/// The engine itself is instantaneous; the delay only exists so the front-end
/// can show a scanning state. Aborting the returned handle before the delay
/// expires means nothing is ever sent.
pub fn spawn_scan(
    request: ScanRequest,
    delay: Duration,
    tx: mpsc::Sender<ScanOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(token = %request.token, delay_ms = delay.as_millis() as u64, "Scan scheduled.");
        tokio::time::sleep(delay).await;

        let result = engine::evaluate(&request.url);
        info!(
            token = %request.token,
            url = request.url.as_str(),
            score = result.score,
            flaws = result.flaws.len(),
            "Scan complete."
        );

        let outcome = ScanOutcome {
            token: request.token,
            url: request.url,
            result,
        };
        if tx.send(outcome).await.is_err() {
            warn!("Scan finished but nobody is listening for the result.");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(token: RequestToken, url: &str) -> ScanRequest {
        ScanRequest { token, url: url.to_string() }
    }

    #[test]
    fn tokens_increase() {
        let first = RequestToken::default().next();
        let second = first.next();
        assert!(second > first);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn outcome_carries_token_and_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = RequestToken::default().next();
        spawn_scan(request(token, "https://github.com"), Duration::from_millis(5), tx);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.token, token);
        assert_eq!(outcome.url, "https://github.com");
        assert_eq!(outcome.result, engine::evaluate("https://github.com"));
    }

    #[tokio::test]
    async fn aborted_scan_delivers_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = RequestToken::default().next();
        let handle = spawn_scan(request(token, "https://bit.ly/x"), Duration::from_secs(60), tx);
        handle.abort();
        let _ = handle.await;

        // The aborted task dropped its sender, so the channel closes empty.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_panic_the_task() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let handle = spawn_scan(request(RequestToken::default(), ""), Duration::ZERO, tx);
        assert!(handle.await.is_ok());
    }
}

// src/core/engine.rs

use tracing::debug;

use crate::core::knowledge_base::{
    self, RulePass, BASE_SCORE, HTTPS_BONUS, INSECURE_CONNECTION, MAX_SCORE, MIN_SCORE,
    NO_FLAWS_DETECTED, PASS_ORDER, SECURE_SCHEME, SUSPICIOUS_PATTERNS, SUSPICIOUS_SCORE,
    TRUSTED_KEYWORDS, TRUSTED_SCORE,
};
use crate::core::models::ScoreResult;

/// Running state threaded through the rule passes.
#[derive(Debug)]
struct Verdict {
    score: i16,
    flaws: Vec<String>,
}

impl Verdict {
    fn new() -> Self {
        Self { score: BASE_SCORE, flaws: Vec::new() }
    }

    fn finish(self) -> ScoreResult {
        let score = self.score.clamp(MIN_SCORE, MAX_SCORE) as u8;
        let flaws = if self.flaws.is_empty() {
            vec![NO_FLAWS_DETECTED.to_string()]
        } else {
            self.flaws
        };
        ScoreResult { score, flaws }
    }
}

/// Scores a raw URL string.
///
/// The URL is never parsed. Apart from the HTTPS prefix check, which looks at
/// the string exactly as given, every rule is a case-insensitive substring
/// test. This function is total: any input, including an empty string,
/// produces a valid `ScoreResult`.
///
/// # Arguments
/// * `url` - The text submitted by the user.
///
/// # Returns
/// A `ScoreResult` with a score in `1..=10` and a non-empty flaw list.
pub fn evaluate(url: &str) -> ScoreResult {
    let lowered = url.to_lowercase();
    let verdict = PASS_ORDER
        .iter()
        .fold(Verdict::new(), |verdict, pass| apply_pass(*pass, url, &lowered, verdict));
    debug!(url, score = verdict.score, flaws = verdict.flaws.len(), "Rule passes finished.");
    verdict.finish()
}

fn apply_pass(pass: RulePass, url: &str, lowered: &str, mut verdict: Verdict) -> Verdict {
    match pass {
        RulePass::Transport => {
            if url.starts_with(SECURE_SCHEME) {
                verdict.score += HTTPS_BONUS;
            } else {
                debug!(%pass, "No secure scheme.");
                verdict.flaws.push(INSECURE_CONNECTION.to_string());
            }
        }
        RulePass::AllowList => {
            for keyword in TRUSTED_KEYWORDS.iter().filter(|k| lowered.contains(*k)) {
                debug!(%pass, keyword, "Trusted keyword matched.");
                verdict.score = TRUSTED_SCORE;
            }
        }
        RulePass::DenyList => {
            for pattern in SUSPICIOUS_PATTERNS.iter().filter(|p| lowered.contains(*p)) {
                debug!(%pass, pattern, "Suspicious pattern matched.");
                verdict.score = SUSPICIOUS_SCORE;
                verdict.flaws.push(knowledge_base::suspicious_keyword_flaw(pattern));
            }
        }
    }
    verdict
}

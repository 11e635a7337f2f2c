//! Static, read-only rule tables for the scoring engine.
//!
//! Every signal the engine knows about lives here. The tables are plain
//! `static` slices, so there is no way to change them once the process starts.

use std::fmt;

/// Lowest score the engine may ever return.
pub const MIN_SCORE: i16 = 1;
/// Highest score the engine may ever return.
pub const MAX_SCORE: i16 = 10;
/// Starting point before any rule fires.
pub const BASE_SCORE: i16 = 5;
/// Added when the URL uses the secure scheme.
pub const HTTPS_BONUS: i16 = 3;
/// Score assigned when an allow-list keyword is present.
pub const TRUSTED_SCORE: i16 = 10;
/// Score assigned when a deny-list pattern is present.
pub const SUSPICIOUS_SCORE: i16 = 2;

/// Case-sensitive prefix checked against the raw URL.
pub const SECURE_SCHEME: &str = "https://";

pub const INSECURE_CONNECTION: &str = "Insecure connection — HTTPS not used.";
pub const NO_FLAWS_DETECTED: &str = "No flaws detected — looks safe!";

/// Allow-list signals. Presence of any of these raises confidence.
pub static TRUSTED_KEYWORDS: &[&str] = &[
    "google",
    "amazon",
    "microsoft",
    "github",
    "apple",
    "openai",
    "cloudflare",
];

/// Deny-list signals. Each one found is reported as its own flaw.
pub static SUSPICIOUS_PATTERNS: &[&str] = &[
    "192.168",
    "login",
    "verify",
    "update",
    "free",
    "bit.ly",
    "tinyurl",
    "prize",
    "secure",
    "confirm",
];

/// Builds the flaw message for a matched deny-list pattern.
pub fn suspicious_keyword_flaw(pattern: &str) -> String {
    format!("Suspicious keyword found: {}", pattern)
}

/// The groups of rules the engine runs, one pass per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RulePass {
    /// The HTTPS prefix check.
    Transport,
    /// Trusted keywords.
    AllowList,
    /// Suspicious patterns.
    DenyList,
}

impl fmt::Display for RulePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulePass::Transport => write!(f, "transport"),
            RulePass::AllowList => write!(f, "allow-list"),
            RulePass::DenyList => write!(f, "deny-list"),
        }
    }
}

/// Evaluation order of the rule passes.
///
/// Policy: the deny list always wins over the allow list. Both passes assign
/// the score outright, so whichever runs last decides it; `DenyList` must stay
/// after `AllowList` in this array.
pub static PASS_ORDER: [RulePass; 3] = [RulePass::Transport, RulePass::AllowList, RulePass::DenyList];

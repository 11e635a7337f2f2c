// src/core/mod.rs

// The `core` module holds everything that decides a URL's trust score.
// Nothing in here touches the terminal, the network or the filesystem.

/// Data structures shared by the engine and the front-ends, such as
/// `ScoreResult` and `ScanReport`.
pub mod models;

/// The fixed rule tables and the messages attached to them.
pub mod knowledge_base;

/// The scoring engine itself.
pub mod engine;

/// Maps a numeric score to a human-readable status label.
pub mod status;

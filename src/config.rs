// src/config.rs

use std::time::Duration;

use clap::{Parser, Subcommand};

/// Default artificial scan latency, so the scanning state is visible.
pub const DEFAULT_SCAN_DELAY_MS: u64 = 2500;

#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(author, version, about = "Score how trustworthy a URL looks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Milliseconds to wait before showing a result in the interactive UI
    #[arg(long, value_name = "MS", env = "PHISHGUARD_SCAN_DELAY_MS", default_value_t = DEFAULT_SCAN_DELAY_MS)]
    pub delay_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single URL and print the report
    Scan {
        /// The URL to score, taken verbatim
        #[arg(allow_hyphen_values = true)]
        url: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings for the interactive front-end, resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub scan_delay: Duration,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            scan_delay: Duration::from_millis(cli.delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn delay_flag_sets_scan_delay() {
        let cli = Cli::try_parse_from(["phishguard", "--delay-ms", "10"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(Settings::from(&cli).scan_delay, Duration::from_millis(10));
    }

    #[test]
    fn scan_subcommand_takes_url_verbatim() {
        let cli = Cli::try_parse_from(["phishguard", "scan", "HTTPS://Example.com", "--json"]).unwrap();
        match cli.command {
            Some(Command::Scan { url, json }) => {
                assert_eq!(url, "HTTPS://Example.com");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn scan_accepts_empty_url() {
        let cli = Cli::try_parse_from(["phishguard", "scan", ""]).unwrap();
        assert!(matches!(cli.command, Some(Command::Scan { ref url, json: false }) if url.is_empty()));
    }
}

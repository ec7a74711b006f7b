//! Command-line configuration for the bid console.

use std::path::PathBuf;

use clap::Parser;

/// Default CSV file loaded by menu option 1
pub const DEFAULT_CSV_PATH: &str = "example.csv";

/// Default bid id used by find and remove
pub const DEFAULT_BID_KEY: &str = "98109";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug, Clone)]
#[command(name = "bid-tree", about = "Load, list, find and remove auction bids held in a binary search tree")]
pub struct CliArgs {
    /// CSV file to load bids from
    #[arg(default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Bid id used by the find and remove menu options
    #[arg(default_value = DEFAULT_BID_KEY)]
    pub bid_key: String,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "bid_tree=trace"
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the log filter: flag, then `RUST_LOG`, then the default
    pub fn log_filter(&self) -> String {
        self.log_level
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::parse_from(["bid-tree"]);

        assert_eq!(args.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
        assert_eq!(args.bid_key, DEFAULT_BID_KEY);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_cli_positional_and_flag() {
        let args = CliArgs::parse_from(["bid-tree", "bids.csv", "97990", "--log-level", "debug"]);

        assert_eq!(args.csv_path, PathBuf::from("bids.csv"));
        assert_eq!(args.bid_key, "97990");
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}

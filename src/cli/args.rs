//! CLI argument definitions for `release-timeline`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use release_timeline::config::ConfigOverrides;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `out_dir`, `title`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "release-timeline",
    about = "Render a static HTML timeline of Python release milestones",
    version = env!("CARGO_PKG_VERSION"),
    subcommand_negates_reqs = true
)]
pub struct Cli {
    /// Input TOML file with release milestones
    #[arg(value_name = "FILE", required = true)]
    pub input: Option<PathBuf>,

    /// Directory for the generated pages (default: config `out_dir`)
    #[arg(short, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Date used to decide which versions are past end of life (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Page title for this run (default: config `title`)
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Optional subcommand; without one the input FILE is rendered.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--out-dir` and `--title` are applied like the `--config-*` flags so
    /// the rest of the program only reads the merged config.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("release-timeline").chain(args.iter().copied()))
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_positional_input() {
        let cli = parse(&["release-versions.toml"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("release-versions.toml")));
        assert!(cli.command.is_none());
        assert!(cli.today.is_none());
    }

    #[test]
    fn test_input_required_without_subcommand() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_config_subcommand_without_input() {
        let cli = parse(&["config", "get", "title"]).unwrap();
        assert!(cli.input.is_none());
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                subcommand: Some(ConfigSubcommand::Get { key: Some(ref k) })
            }) if k == "title"
        ));
    }

    #[test]
    fn test_today_parses_as_date() {
        let cli = parse(&["data.toml", "--today", "2024-10-07"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 10, 7));
        assert!(parse(&["data.toml", "--today", "yesterday"]).is_err());
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = parse(&["data.toml"]).unwrap().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.out_dir.is_none());
        assert!(overrides.title.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = parse(&[
            "data.toml",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--out-dir",
            "/output",
            "--title",
            "CPython releases",
        ])
        .unwrap();

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
        assert_eq!(overrides.title, Some("CPython releases".to_string()));
    }
}

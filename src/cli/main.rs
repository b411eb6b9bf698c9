//! Command-line interface entry point for `release-timeline`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use logger::{debug, enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use release_timeline::config::Config;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!("release-timeline v{}", release_timeline::get_version());

    match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        None => {
            // clap enforces FILE when no subcommand is given
            let Some(input) = args.input else {
                eprintln!("✗ No input file given");
                std::process::exit(2);
            };
            let today = args
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::generate::run(&input, today, &config);
        }
    }
}

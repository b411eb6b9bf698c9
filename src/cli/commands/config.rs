//! Config command handler

use crate::args::ConfigSubcommand;
use logger::{debug, error};
use release_timeline::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole config when no key is given
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("Unknown config key: '{k}'");
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "\n=== Configuration ({}) ===\n",
            Config::get_config_file_path().display()
        );
        print!("{config}");
    }
}

/// Set a value and persist it
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    debug!("config: {key} set to '{value}'");
    println!("✓ Set {key} = {value}");
}

/// Reset one value to its default and persist it
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            error!("Failed to remove config file: {e}");
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

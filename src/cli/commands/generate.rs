//! Site generation command handler

use logger::{error, info, verbose};
use release_timeline::config::Config;
use release_timeline::{generate_site, SiteOptions};
use std::path::{Path, PathBuf};

/// Run the generate command.
///
/// Exits the process with status 1 if anything fails.
///
/// # Arguments
/// * `input_file` - Path to the release catalog
/// * `today` - Invocation date used for the end-of-life check
/// * `config` - Merged configuration (output directory, title, chart loader)
pub fn run(input_file: &Path, today: chrono::NaiveDate, config: &Config) {
    let options = site_options(today, config);
    match generate_site(input_file, &options) {
        Ok(paths) => {
            for path in &paths {
                println!("✓ Page generated: {}", path.display());
            }
            info!(
                "Timeline for {} written to {}",
                input_file.display(),
                options.out_dir.display()
            );
        }
        Err(err) => {
            error!("Timeline generation failed for {}: {err}", input_file.display());
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

/// Build site options from config, falling back to built-in defaults for empty values
fn site_options(today: chrono::NaiveDate, config: &Config) -> SiteOptions {
    let out_dir = if config.paths.out_dir.is_empty() {
        PathBuf::from("site")
    } else {
        PathBuf::from(&config.paths.out_dir)
    };
    let mut options = SiteOptions::new(out_dir, today);
    if !config.page.title.is_empty() {
        options.title.clone_from(&config.page.title);
    }
    if !config.page.chart_loader.is_empty() {
        options.chart_loader.clone_from(&config.page.chart_loader);
    }
    verbose!(
        "Generating into {} as of {} (title: {})",
        options.out_dir.display(),
        options.today,
        options.title
    );
    options
}

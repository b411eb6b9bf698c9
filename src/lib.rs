//! Library for `release-timeline`
//!
//! Reads a TOML catalog of Python release milestones and renders static
//! HTML timeline pages. The CLI in `src/cli` is a thin layer over this crate.

pub mod config;
pub mod core;

pub use crate::core::error::{CatalogProblem, TimelineError};
pub use crate::core::site::{generate_site, SiteOptions};

/// Returns the current version of the `release-timeline` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! CLI command handlers for `release-timeline`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod generate;

//! Core module: catalog loading, timeline building and page rendering

pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod site;
pub mod timeline;

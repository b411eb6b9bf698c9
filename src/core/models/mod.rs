//! Data models for `release-timeline`

pub mod catalog;
pub mod record;
pub mod version;

pub use catalog::{Catalog, UPSTREAM_SOURCE};
pub use record::{Milestone, VersionRecord};
pub use version::VersionId;

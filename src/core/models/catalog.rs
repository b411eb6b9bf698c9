//! Release catalog model

use super::{VersionId, VersionRecord};
use crate::core::error::TimelineError;
use crate::core::loader;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Source key whose records drive the timeline
pub const UPSTREAM_SOURCE: &str = "upstream";

/// All versions known to the catalog plus the upstream milestone records.
///
/// Other sources only contribute version keys; a version that has no
/// upstream record is listed by [`versions`](Self::versions) but never drawn.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sources: Vec<String>,
    versions: BTreeSet<VersionId>,
    upstream: HashMap<String, VersionRecord>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a catalog file
    ///
    /// # Errors
    /// See [`loader::load_catalog`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TimelineError> {
        loader::load_catalog(path)
    }

    /// Parse and validate catalog text
    ///
    /// # Errors
    /// See [`loader::parse_catalog_str`].
    pub fn from_toml_str(text: &str) -> Result<Self, TimelineError> {
        loader::parse_catalog_str(text, "<string>")
    }

    /// Register `version` as appearing under `source`
    pub fn add_version(&mut self, source: &str, version: VersionId) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
        self.versions.insert(version);
    }

    /// Add an upstream record (also registers the version)
    pub fn insert_upstream(&mut self, version: VersionId, record: VersionRecord) {
        self.upstream.insert(version.as_str().to_string(), record);
        self.add_version(UPSTREAM_SOURCE, version);
    }

    /// Union of version keys across every source, ascending numerically
    pub fn versions(&self) -> impl Iterator<Item = &VersionId> {
        self.versions.iter()
    }

    /// Upstream milestones for a version, by its catalog spelling
    #[must_use]
    pub fn upstream(&self, version: &str) -> Option<&VersionRecord> {
        self.upstream.get(version)
    }

    /// Source keys in the order they were first seen
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Number of distinct versions across all sources
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Number of versions with an upstream record
    #[must_use]
    pub fn upstream_count(&self) -> usize {
        self.upstream.len()
    }
}

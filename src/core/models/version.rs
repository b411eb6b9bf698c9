//! Version identifier model

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A release version such as `3.11`, ordered by its numeric components.
///
/// The original spelling is kept so rows and lookups use exactly the key
/// found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionId {
    raw: String,
    parts: Vec<u64>,
}

impl VersionId {
    /// The version exactly as written in the catalog
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric components, most significant first
    #[must_use]
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl FromStr for VersionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("Invalid version component '{part}' in '{s}'"));
                }
                part.parse::<u64>()
                    .map_err(|e| format!("Invalid version component '{part}' in '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: s.to_string(),
            parts,
        })
    }
}

impl Ord for VersionId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Spelling only breaks ties such as "3.1" vs "3.01"
        self.parts
            .cmp(&other.parts)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for VersionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

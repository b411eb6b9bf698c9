//! Error types for catalog loading, timeline building and site output.

use crate::core::models::VersionId;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single schema problem found while validating the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogProblem {
    /// A top-level source entry is not a table of versions.
    SourceNotTable {
        /// Source key (e.g. `upstream`)
        source: String,
    },
    /// A version key is not a dot-separated list of integers.
    InvalidVersion {
        /// Source key the version was found under
        source: String,
        /// The offending key
        version: String,
    },
    /// An upstream version entry is not a table of milestones.
    RecordNotTable {
        /// Version key
        version: String,
    },
    /// Required milestones absent from an upstream record.
    MissingMilestones {
        /// Version key
        version: String,
        /// Every missing milestone key, in schema order
        missing: Vec<&'static str>,
    },
    /// `eol` is set but `last-bugfix` is not.
    EolWithoutLastBugfix {
        /// Version key
        version: String,
    },
    /// A known milestone holds something other than a plain calendar date.
    NotADate {
        /// Version key
        version: String,
        /// Milestone key
        milestone: String,
        /// Rendering of the offending value
        value: String,
    },
}

impl fmt::Display for CatalogProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotTable { source } => {
                write!(f, "source '{source}' is not a table of versions")
            }
            Self::InvalidVersion { source, version } => write!(
                f,
                "source '{source}': '{version}' is not a dot-separated version number"
            ),
            Self::RecordNotTable { version } => {
                write!(f, "version {version}: entry is not a table of milestones")
            }
            Self::MissingMilestones { version, missing } => write!(
                f,
                "version {version}: missing required milestone(s): {}",
                missing.join(", ")
            ),
            Self::EolWithoutLastBugfix { version } => {
                write!(f, "version {version}: 'eol' is set without 'last-bugfix'")
            }
            Self::NotADate {
                version,
                milestone,
                value,
            } => write!(
                f,
                "version {version}: milestone '{milestone}' must be a calendar date, got {value}"
            ),
        }
    }
}

/// Errors produced while generating the timeline site.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid TOML.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Where the text came from (a path or `<string>`)
        origin: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The catalog parsed but failed schema validation.
    #[error("invalid release catalog ({} problem(s)):\n  {}", .problems.len(), join_problems(.problems))]
    InvalidCatalog {
        /// Every problem found, in catalog order
        problems: Vec<CatalogProblem>,
    },

    /// A version without an end-of-life date was reached before any earlier
    /// version established one, so its open-ended bar has no right edge.
    #[error("version {version} has no 'eol' date and no earlier release has one to bound it")]
    NoPriorEol {
        /// The version needing a future bar
        version: VersionId,
    },

    /// The HTML template failed to render.
    #[error("failed to render {page}: {source}")]
    Render {
        /// Output file name of the page
        page: String,
        /// Underlying template error
        #[source]
        source: askama::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Output directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

fn join_problems(problems: &[CatalogProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}

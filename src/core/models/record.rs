//! Per-version milestone record

use chrono::NaiveDate;

/// Milestone keys understood in a version table.
///
/// Order matches the release process and is the order in which missing
/// required keys are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Start of development (optional)
    Dev,
    /// First alpha
    Alpha1,
    /// First beta
    Beta1,
    /// First release candidate
    Rc1,
    /// Final release
    Final,
    /// Last bugfix release; security-only support starts here (optional)
    LastBugfix,
    /// End of life (optional, requires `last-bugfix`)
    Eol,
}

impl Milestone {
    /// All milestones in release-process order
    pub const ALL: [Self; 7] = [
        Self::Dev,
        Self::Alpha1,
        Self::Beta1,
        Self::Rc1,
        Self::Final,
        Self::LastBugfix,
        Self::Eol,
    ];

    /// Key used in the catalog file
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Alpha1 => "alpha1",
            Self::Beta1 => "beta1",
            Self::Rc1 => "rc1",
            Self::Final => "final",
            Self::LastBugfix => "last-bugfix",
            Self::Eol => "eol",
        }
    }

    /// Whether every version record must carry this milestone
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Alpha1 | Self::Beta1 | Self::Rc1 | Self::Final)
    }

    /// Look up a milestone by its catalog key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// Milestone dates of one upstream version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Start of development
    pub dev: Option<NaiveDate>,
    /// First alpha
    pub alpha1: NaiveDate,
    /// First beta
    pub beta1: NaiveDate,
    /// First release candidate
    pub rc1: NaiveDate,
    /// Final release (`final` in the catalog)
    pub final_release: NaiveDate,
    /// Last bugfix release
    pub last_bugfix: Option<NaiveDate>,
    /// End of life
    pub eol: Option<NaiveDate>,
}

impl VersionRecord {
    /// True when the version reached end of life on or before `today`
    #[must_use]
    pub fn is_retired(&self, today: NaiveDate) -> bool {
        self.eol.is_some_and(|eol| eol <= today)
    }
}

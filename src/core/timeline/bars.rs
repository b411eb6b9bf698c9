//! Phase bars derived from a version's milestones

use crate::core::models::VersionRecord;
use chrono::NaiveDate;
use std::fmt;

/// A release phase shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Development before the first alpha
    Dev,
    /// Alpha releases
    Alpha,
    /// Beta releases
    Beta,
    /// Release candidates
    Rc,
    /// Bugfix releases after final
    Stable,
    /// Security-only fixes after the last bugfix release
    Security,
    /// Past end of life (only ever a closing edge)
    Eol,
    /// Synthetic right edge for versions with no end-of-life date yet
    Future,
}

impl Phase {
    /// Label shown in the chart
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Alpha => "\u{3b1}",
            Self::Beta => "\u{3b2}",
            Self::Rc => "rc",
            Self::Stable => "stable",
            Self::Security => "security",
            Self::Eol => "eol",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Start of a phase. Consecutive bars bound the phase of the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    /// Phase starting at `date`
    pub phase: Phase,
    /// First day of the phase
    pub date: NaiveDate,
}

impl Bar {
    /// Create a bar
    #[must_use]
    pub const fn new(phase: Phase, date: NaiveDate) -> Self {
        Self { phase, date }
    }
}

/// Bars for every milestone the record carries, in release order.
///
/// An `eol` equal to `last-bugfix` would be zero-width and is left out, so
/// `security` becomes the last bar. The synthetic `future` bar is not added
/// here; see [`TimelineBuilder`](super::TimelineBuilder).
#[must_use]
pub fn milestone_bars(record: &VersionRecord) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(8);
    if let Some(dev) = record.dev {
        bars.push(Bar::new(Phase::Dev, dev));
    }
    bars.extend([
        Bar::new(Phase::Alpha, record.alpha1),
        Bar::new(Phase::Beta, record.beta1),
        Bar::new(Phase::Rc, record.rc1),
        Bar::new(Phase::Stable, record.final_release),
    ]);
    if let Some(last_bugfix) = record.last_bugfix {
        bars.push(Bar::new(Phase::Security, last_bugfix));
    }
    if let Some(eol) = record.eol {
        if record.last_bugfix != Some(eol) {
            bars.push(Bar::new(Phase::Eol, eol));
        }
    }
    bars
}

//! Interval builder: milestones → bars → rows
//!
//! Versions are processed in ascending order in a single fold. The fold
//! carries an [`EolHorizon`], the latest end-of-life edge seen so far, which
//! becomes the right edge of every version that has no end-of-life date yet.

use super::bars::{milestone_bars, Bar, Phase};
use crate::core::error::TimelineError;
use crate::core::models::{Catalog, VersionId, VersionRecord};
use chrono::NaiveDate;
use logger::debug;

/// Which versions a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Drop versions whose end of life is on or before today
    CurrentOnly,
    /// Keep every version
    IncludingEol,
}

impl ViewMode {
    /// Both views, in generation order
    pub const ALL: [Self; 2] = [Self::CurrentOnly, Self::IncludingEol];

    /// Whether retired versions are shown
    #[must_use]
    pub const fn includes_retired(self) -> bool {
        matches!(self, Self::IncludingEol)
    }
}

/// Latest end-of-life edge among the versions processed so far.
///
/// Starts unset for every pass and only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EolHorizon(Option<NaiveDate>);

impl EolHorizon {
    /// An unset horizon
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Current edge, if any EOL'd version has been seen
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        self.0
    }

    /// Horizon after seeing an end-of-life edge at `date`
    #[must_use]
    pub fn absorb(self, date: NaiveDate) -> Self {
        Self(Some(self.0.map_or(date, |current| current.max(date))))
    }
}

/// The complete bar sequence of one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBars {
    /// Version the bars belong to
    pub version: VersionId,
    /// Phase starts, in order; the last bar only closes the previous phase
    pub bars: Vec<Bar>,
}

impl VersionBars {
    /// Pair each bar with the next one's date
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        rows_from_bars(self.version.as_str(), &self.bars)
    }
}

/// One phase of one version, drawn from `start` up to `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row label (the version string)
    pub version: String,
    /// Phase drawn in this interval
    pub phase: Phase,
    /// First day of the phase
    pub start: NaiveDate,
    /// First day of the following phase
    pub end: NaiveDate,
}

/// Turn N bars into N−1 rows labeled by each interval's starting bar.
#[must_use]
pub fn rows_from_bars(version: &str, bars: &[Bar]) -> Vec<Row> {
    bars.windows(2)
        .map(|pair| Row {
            version: version.to_string(),
            phase: pair[0].phase,
            start: pair[0].date,
            end: pair[1].date,
        })
        .collect()
}

/// Complete a version's bars and advance the horizon.
///
/// A version with an `eol` pushes the horizon to its last bar (the EOL date,
/// or `last-bugfix` when the two coincide). A version without one gets a
/// `future` bar at the current horizon.
///
/// # Errors
/// Returns [`TimelineError::NoPriorEol`] when the version needs a `future`
/// bar but no earlier version has set the horizon.
pub fn close_bars(
    version: &VersionId,
    record: &VersionRecord,
    horizon: EolHorizon,
) -> Result<(Vec<Bar>, EolHorizon), TimelineError> {
    let mut bars = milestone_bars(record);

    if record.eol.is_some() {
        let horizon = bars
            .last()
            .map_or(horizon, |last| horizon.absorb(last.date));
        return Ok((bars, horizon));
    }

    let edge = horizon.date().ok_or_else(|| TimelineError::NoPriorEol {
        version: version.clone(),
    })?;
    bars.push(Bar::new(Phase::Future, edge));
    Ok((bars, horizon))
}

/// Builds timeline rows from a catalog for a fixed invocation date.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder<'a> {
    catalog: &'a Catalog,
    today: NaiveDate,
}

impl<'a> TimelineBuilder<'a> {
    /// Create a builder; `today` decides which versions are retired
    #[must_use]
    pub const fn new(catalog: &'a Catalog, today: NaiveDate) -> Self {
        Self { catalog, today }
    }

    /// Bar sequences for every drawn version, ascending
    ///
    /// # Errors
    /// Fails on the first version that needs a `future` bar before any
    /// earlier drawn version has an end-of-life date.
    pub fn version_bars(&self, mode: ViewMode) -> Result<Vec<VersionBars>, TimelineError> {
        let (_, drawn) = self.catalog.versions().try_fold(
            (EolHorizon::new(), Vec::new()),
            |(horizon, mut drawn), version| {
                let Some(record) = self.catalog.upstream(version.as_str()) else {
                    debug!("version {version}: no upstream record, skipped");
                    return Ok((horizon, drawn));
                };
                if !mode.includes_retired() && record.is_retired(self.today) {
                    debug!("version {version}: retired as of {}, hidden", self.today);
                    return Ok((horizon, drawn));
                }

                let (bars, horizon) = close_bars(version, record, horizon)?;
                drawn.push(VersionBars {
                    version: version.clone(),
                    bars,
                });
                Ok::<_, TimelineError>((horizon, drawn))
            },
        )?;
        Ok(drawn)
    }

    /// All rows for a view, version-ascending then phase order
    ///
    /// # Errors
    /// See [`version_bars`](Self::version_bars).
    pub fn build(&self, mode: ViewMode) -> Result<Vec<Row>, TimelineError> {
        let rows: Vec<Row> = self
            .version_bars(mode)?
            .iter()
            .flat_map(VersionBars::rows)
            .collect();
        debug!("{mode:?}: {} row(s)", rows.len());
        Ok(rows)
    }
}

//! Timeline construction
//!
//! Converts per-version milestone dates into labeled, contiguous intervals
//! ready to be drawn.

pub mod bars;
pub mod builder;

pub use bars::{milestone_bars, Bar, Phase};
pub use builder::{
    close_bars, rows_from_bars, EolHorizon, Row, TimelineBuilder, VersionBars, ViewMode,
};

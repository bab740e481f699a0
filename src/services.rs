//! Capabilities the component borrows from its host.
//!
//! Delta extraction and split coloring depend on the live attempt and on
//! layout-wide color rules, neither of which this crate owns. The host
//! implements these traits and hands them to `PreviousSegment::update`.

use crate::color::Color;
use crate::run::TimingMethod;
use crate::time_span::TimeSpan;
use crate::timer::Snapshot;

/// Raw deltas of the current attempt against a comparison
pub trait SegmentDeltas {
    /// Present only while the in-progress segment already shows a delta
    /// worth displaying live.
    fn live_delta(
        &self,
        timer: &Snapshot<'_>,
        comparison: &str,
        method: TimingMethod,
    ) -> Option<TimeSpan>;

    fn live_segment_delta(
        &self,
        timer: &Snapshot<'_>,
        split_index: usize,
        comparison: &str,
        method: TimingMethod,
    ) -> Option<TimeSpan>;

    fn previous_segment_delta(
        &self,
        timer: &Snapshot<'_>,
        split_index: usize,
        comparison: &str,
        method: TimingMethod,
    ) -> Option<TimeSpan>;
}

/// Arguments of a split color lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorQuery<'a> {
    pub delta: Option<TimeSpan>,
    /// `None` when the index would fall before the first segment
    pub split_index: Option<usize>,
    pub personal_best_comparison: bool,
    pub segment_evaluation: bool,
    pub comparison: &'a str,
    pub timing_method: TimingMethod,
}

/// Ahead/behind/gaining/losing/best segment classification
pub trait SplitColors {
    fn split_color(&self, timer: &Snapshot<'_>, query: &ColorQuery<'_>) -> Option<Color>;
}

/// Renders an optional span as display text
pub trait TimeFormatter {
    fn format(&self, time: Option<TimeSpan>) -> String;
}

/// The host capabilities needed for one update
#[derive(Clone, Copy)]
pub struct Services<'s> {
    pub deltas: &'s dyn SegmentDeltas,
    pub colors: &'s dyn SplitColors,
}

impl<'s> Services<'s> {
    pub fn new(deltas: &'s dyn SegmentDeltas, colors: &'s dyn SplitColors) -> Self {
        Self { deltas, colors }
    }
}

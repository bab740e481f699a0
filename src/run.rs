use crate::comparison::{CURRENT_COMPARISON, PERSONAL_BEST};
use crate::time_span::TimeSpan;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// The parallel clocks a run is timed with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum TimingMethod {
    #[default]
    RealTime,
    GameTime,
}

/// One optional value per timing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Time {
    pub real_time: Option<TimeSpan>,
    pub game_time: Option<TimeSpan>,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_real_time(mut self, time: Option<TimeSpan>) -> Self {
        self.real_time = time;
        self
    }

    pub fn with_game_time(mut self, time: Option<TimeSpan>) -> Self {
        self.game_time = time;
        self
    }

    pub fn with_timing_method(mut self, method: TimingMethod, time: Option<TimeSpan>) -> Self {
        self[method] = time;
        self
    }
}

impl Index<TimingMethod> for Time {
    type Output = Option<TimeSpan>;

    fn index(&self, method: TimingMethod) -> &Self::Output {
        match method {
            TimingMethod::RealTime => &self.real_time,
            TimingMethod::GameTime => &self.game_time,
        }
    }
}

impl IndexMut<TimingMethod> for Time {
    fn index_mut(&mut self, method: TimingMethod) -> &mut Self::Output {
        match method {
            TimingMethod::RealTime => &mut self.real_time,
            TimingMethod::GameTime => &mut self.game_time,
        }
    }
}

/// A single step of the run with its best ever duration and the cumulative
/// time each comparison reached at its end
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub name: String,
    pub best_segment_time: Time,
    pub comparisons: HashMap<String, Time>,
}

impl Segment {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_best_segment_time(mut self, time: Time) -> Self {
        self.best_segment_time = time;
        self
    }

    pub fn with_comparison<S: Into<String>>(mut self, comparison: S, time: Time) -> Self {
        self.comparisons.insert(comparison.into(), time);
        self
    }

    /// Cumulative comparison time for this segment. Unknown comparisons read
    /// as an empty `Time`.
    pub fn comparison(&self, comparison: &str) -> Time {
        self.comparisons.get(comparison).copied().unwrap_or_default()
    }

    pub fn comparison_time(&self, comparison: &str, method: TimingMethod) -> Option<TimeSpan> {
        self.comparison(comparison)[method]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("a run needs at least one segment")]
    Empty,
    #[error("comparison `{0}` already exists")]
    DuplicateComparison(String),
    #[error("`{0}` is reserved and cannot be stored as a comparison")]
    ReservedComparison(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunData {
    segments: Vec<Segment>,
    #[serde(default)]
    custom_comparisons: Vec<String>,
}

/// The ordered segments of one attempt plus the comparisons recorded for them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RunData")]
pub struct Run {
    segments: Vec<Segment>,
    custom_comparisons: Vec<String>,
}

impl Run {
    pub fn new(segments: Vec<Segment>) -> Result<Self, RunError> {
        if segments.is_empty() {
            return Err(RunError::Empty);
        }
        Ok(Self {
            segments,
            custom_comparisons: vec![PERSONAL_BEST.to_string()],
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a constructed run; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn comparisons(&self) -> impl Iterator<Item = &str> {
        self.custom_comparisons.iter().map(String::as_str)
    }

    pub fn has_comparison(&self, comparison: &str) -> bool {
        self.custom_comparisons.iter().any(|c| c == comparison)
    }

    pub fn add_comparison<S: Into<String>>(&mut self, comparison: S) -> Result<(), RunError> {
        let comparison = comparison.into();
        if comparison == CURRENT_COMPARISON {
            return Err(RunError::ReservedComparison(comparison));
        }
        if self.has_comparison(&comparison) {
            return Err(RunError::DuplicateComparison(comparison));
        }
        self.custom_comparisons.push(comparison);
        Ok(())
    }

    pub fn best_segment_time(&self, index: usize, method: TimingMethod) -> Option<TimeSpan> {
        self.segment(index)?.best_segment_time[method]
    }

    pub fn comparison_time(
        &self,
        index: usize,
        comparison: &str,
        method: TimingMethod,
    ) -> Option<TimeSpan> {
        self.segment(index)?.comparison_time(comparison, method)
    }
}

impl TryFrom<RunData> for Run {
    type Error = RunError;

    fn try_from(data: RunData) -> Result<Self, Self::Error> {
        let mut run = Run::new(data.segments)?;
        if let Some(dup) = data.custom_comparisons.iter().duplicates().next() {
            return Err(RunError::DuplicateComparison(dup.clone()));
        }
        for comparison in data.custom_comparisons {
            if comparison == PERSONAL_BEST {
                continue;
            }
            run.add_comparison(comparison)?;
        }
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn secs(s: f64) -> Option<TimeSpan> {
        Some(TimeSpan::from_seconds(s))
    }

    #[test]
    fn test_empty_run_is_rejected() {
        assert_matches!(Run::new(vec![]), Err(RunError::Empty));
    }

    #[test]
    fn test_personal_best_always_present() {
        let run = Run::new(vec![Segment::new("1-1")]).unwrap();
        assert!(run.has_comparison(PERSONAL_BEST));
        assert!(!run.has_comparison(CURRENT_COMPARISON));
    }

    #[test]
    fn test_add_comparison_rejects_duplicates_and_alias() {
        let mut run = Run::new(vec![Segment::new("1-1")]).unwrap();
        run.add_comparison("Sum of Best").unwrap();
        assert_eq!(
            run.add_comparison("Sum of Best"),
            Err(RunError::DuplicateComparison("Sum of Best".into()))
        );
        assert_matches!(
            run.add_comparison(CURRENT_COMPARISON),
            Err(RunError::ReservedComparison(_))
        );
        assert_eq!(
            run.comparisons().collect::<Vec<_>>(),
            vec![PERSONAL_BEST, "Sum of Best"]
        );
    }

    #[test]
    fn test_time_indexed_by_method() {
        let time = Time::new()
            .with_real_time(secs(10.0))
            .with_timing_method(TimingMethod::GameTime, secs(8.0));
        assert_eq!(time[TimingMethod::RealTime], secs(10.0));
        assert_eq!(time[TimingMethod::GameTime], secs(8.0));
    }

    #[test]
    fn test_lookups_out_of_range_are_absent() {
        let run = Run::new(vec![Segment::new("only")
            .with_best_segment_time(Time::new().with_real_time(secs(5.0)))])
        .unwrap();
        assert_eq!(run.best_segment_time(0, TimingMethod::RealTime), secs(5.0));
        assert_eq!(run.best_segment_time(0, TimingMethod::GameTime), None);
        assert_eq!(run.best_segment_time(3, TimingMethod::RealTime), None);
        assert_eq!(
            run.comparison_time(0, PERSONAL_BEST, TimingMethod::RealTime),
            None
        );
    }
}

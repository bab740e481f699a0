use crate::color::Color;
use crate::comparison::PERSONAL_BEST;
use crate::run::{Run, TimingMethod};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum TimerPhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Ended,
}

impl TimerPhase {
    /// Running or paused, i.e. a segment may be in progress
    pub fn is_active(self) -> bool {
        matches!(self, TimerPhase::Running | TimerPhase::Paused)
    }
}

/// Read-only view of the timer for one refresh tick
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub run: &'a Run,
    pub phase: TimerPhase,
    /// Segment in progress, or one past the last completed segment
    pub current_split_index: usize,
    pub timing_method: TimingMethod,
    pub current_comparison: &'a str,
    pub layout_text_color: Color,
}

impl<'a> Snapshot<'a> {
    pub fn new(run: &'a Run) -> Self {
        Self {
            run,
            phase: TimerPhase::NotStarted,
            current_split_index: 0,
            timing_method: TimingMethod::RealTime,
            current_comparison: PERSONAL_BEST,
            layout_text_color: Color::WHITE,
        }
    }

    pub fn with_phase(mut self, phase: TimerPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_split_index(mut self, index: usize) -> Self {
        self.current_split_index = index;
        self
    }

    pub fn with_timing_method(mut self, method: TimingMethod) -> Self {
        self.timing_method = method;
        self
    }

    pub fn with_current_comparison(mut self, comparison: &'a str) -> Self {
        self.current_comparison = comparison;
        self
    }

    pub fn with_layout_text_color(mut self, color: Color) -> Self {
        self.layout_text_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_phases() {
        assert!(TimerPhase::Running.is_active());
        assert!(TimerPhase::Paused.is_active());
        assert!(!TimerPhase::NotStarted.is_active());
        assert!(!TimerPhase::Ended.is_active());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(TimerPhase::NotStarted.to_string(), "NotStarted");
        assert_eq!(TimingMethod::GameTime.to_string(), "GameTime");
    }
}

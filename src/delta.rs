use crate::services::SegmentDeltas;
use crate::time_span::TimeSpan;
use crate::timer::{Snapshot, TimerPhase};

/// Which segment was evaluated and the delta it produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaSelection {
    pub delta: Option<TimeSpan>,
    pub split_index: usize,
    pub is_live: bool,
}

/// Pick the live segment if it already shows a delta, otherwise the last
/// completed one. `None` means no segment is evaluated this tick.
pub fn select(
    timer: &Snapshot<'_>,
    comparison: &str,
    deltas: &dyn SegmentDeltas,
) -> Option<DeltaSelection> {
    let method = timer.timing_method;
    if timer.phase == TimerPhase::NotStarted {
        return None;
    }

    let live = timer.phase.is_active()
        && deltas.live_delta(timer, comparison, method).is_some();

    if live {
        let split_index = timer.current_split_index;
        Some(DeltaSelection {
            delta: deltas.live_segment_delta(timer, split_index, comparison, method),
            split_index,
            is_live: true,
        })
    } else if timer.current_split_index > 0 {
        let split_index = timer.current_split_index - 1;
        Some(DeltaSelection {
            delta: deltas.previous_segment_delta(timer, split_index, comparison, method),
            split_index,
            is_live: false,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::PERSONAL_BEST;
    use crate::run::{Run, Segment, TimingMethod};
    use assert_matches::assert_matches;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeDeltas {
        live: Option<TimeSpan>,
        live_segment: Option<TimeSpan>,
        previous_segment: Option<TimeSpan>,
        calls: Cell<usize>,
    }

    impl SegmentDeltas for FakeDeltas {
        fn live_delta(&self, _: &Snapshot<'_>, _: &str, _: TimingMethod) -> Option<TimeSpan> {
            self.calls.set(self.calls.get() + 1);
            self.live
        }

        fn live_segment_delta(
            &self,
            _: &Snapshot<'_>,
            _: usize,
            _: &str,
            _: TimingMethod,
        ) -> Option<TimeSpan> {
            self.calls.set(self.calls.get() + 1);
            self.live_segment
        }

        fn previous_segment_delta(
            &self,
            _: &Snapshot<'_>,
            _: usize,
            _: &str,
            _: TimingMethod,
        ) -> Option<TimeSpan> {
            self.calls.set(self.calls.get() + 1);
            self.previous_segment
        }
    }

    fn run() -> Run {
        Run::new(vec![Segment::new("a"), Segment::new("b"), Segment::new("c")]).unwrap()
    }

    #[test]
    fn test_not_started_selects_nothing() {
        let run = run();
        let timer = Snapshot::new(&run).with_split_index(1);
        let deltas = FakeDeltas {
            live: Some(TimeSpan::from_seconds(1.0)),
            ..FakeDeltas::default()
        };
        assert_eq!(select(&timer, PERSONAL_BEST, &deltas), None);
        assert_eq!(deltas.calls.get(), 0);
    }

    #[test]
    fn test_live_delta_selects_current_segment() {
        let run = run();
        let timer = Snapshot::new(&run)
            .with_phase(TimerPhase::Running)
            .with_split_index(2);
        let deltas = FakeDeltas {
            live: Some(TimeSpan::from_seconds(1.0)),
            live_segment: Some(TimeSpan::from_seconds(0.5)),
            previous_segment: Some(TimeSpan::from_seconds(-2.0)),
            ..FakeDeltas::default()
        };
        assert_eq!(
            select(&timer, PERSONAL_BEST, &deltas),
            Some(DeltaSelection {
                delta: Some(TimeSpan::from_seconds(0.5)),
                split_index: 2,
                is_live: true,
            })
        );
    }

    #[test]
    fn test_paused_counts_as_live() {
        let run = run();
        let timer = Snapshot::new(&run)
            .with_phase(TimerPhase::Paused)
            .with_split_index(1);
        let deltas = FakeDeltas {
            live: Some(TimeSpan::from_seconds(1.0)),
            ..FakeDeltas::default()
        };
        assert_matches!(
            select(&timer, PERSONAL_BEST, &deltas),
            Some(DeltaSelection { split_index: 1, is_live: true, .. })
        );
    }

    #[test]
    fn test_without_live_delta_selects_previous_segment() {
        let run = run();
        let timer = Snapshot::new(&run)
            .with_phase(TimerPhase::Running)
            .with_split_index(2);
        let deltas = FakeDeltas {
            previous_segment: Some(TimeSpan::from_seconds(-2.0)),
            ..FakeDeltas::default()
        };
        assert_eq!(
            select(&timer, PERSONAL_BEST, &deltas),
            Some(DeltaSelection {
                delta: Some(TimeSpan::from_seconds(-2.0)),
                split_index: 1,
                is_live: false,
            })
        );
    }

    #[test]
    fn test_ended_ignores_live_delta() {
        let run = run();
        let timer = Snapshot::new(&run)
            .with_phase(TimerPhase::Ended)
            .with_split_index(3);
        let deltas = FakeDeltas {
            live: Some(TimeSpan::from_seconds(1.0)),
            ..FakeDeltas::default()
        };
        assert_matches!(
            select(&timer, PERSONAL_BEST, &deltas),
            Some(DeltaSelection { split_index: 2, is_live: false, delta: None })
        );
    }

    #[test]
    fn test_first_segment_without_live_delta_selects_nothing() {
        let run = run();
        let timer = Snapshot::new(&run).with_phase(TimerPhase::Running);
        let deltas = FakeDeltas::default();
        assert_eq!(select(&timer, PERSONAL_BEST, &deltas), None);
        // only the live probe was consulted
        assert_eq!(deltas.calls.get(), 1);
    }
}

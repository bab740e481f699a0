use crate::run::{Run, TimingMethod};
use crate::time_span::TimeSpan;

/// How much time could still be saved on the segment at `split_index`
/// against `comparison`.
///
/// The segment's own best time gates the calculation: without it nothing is
/// reported. When the comparison has no split before the segment, the walk
/// steps backwards, adding the best time of each segment it steps off, until
/// it finds a split the comparison does have (or reaches the start of the
/// run, or a segment without a best time). Present results are never
/// negative. An absent result means there is nothing to show, which is not
/// the same as zero.
pub fn possible_time_save(
    run: &Run,
    split_index: usize,
    comparison: &str,
    method: TimingMethod,
) -> Option<TimeSpan> {
    run.best_segment_time(split_index, method)?;

    let mut best_segments = TimeSpan::zero();
    let mut previous_time = TimeSpan::zero();
    let mut index = split_index;

    while index > 0 {
        if let Some(split_time) = run.comparison_time(index - 1, comparison, method) {
            previous_time = split_time;
            break;
        }
        let Some(best) = run.best_segment_time(index, method) else {
            break;
        };
        best_segments = best_segments.checked_add(best)?;
        index -= 1;
    }

    let time = run
        .comparison_time(split_index, comparison, method)?
        .checked_sub(previous_time)?
        .checked_sub(best_segments)?;
    Some(time.clamp_non_negative())
}

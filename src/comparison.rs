use crate::timer::Snapshot;

/// Alias for whichever comparison the user selected globally
pub const CURRENT_COMPARISON: &str = "Current Comparison";
pub const PERSONAL_BEST: &str = "Personal Best";
pub const AVERAGE_SEGMENTS: &str = "Average Segments";
pub const MEDIAN_SEGMENTS: &str = "Median Segments";
pub const LATEST_RUN: &str = "Latest Run";
pub const BALANCED_PB: &str = "Balanced PB";

/// Resolve the configured comparison preference to a comparison that exists
/// on the run.
pub fn resolve<'a>(configured: &'a str, timer: &Snapshot<'a>) -> &'a str {
    let comparison = if configured == CURRENT_COMPARISON {
        timer.current_comparison
    } else {
        configured
    };

    if timer.run.has_comparison(comparison) {
        comparison
    } else {
        log::debug!(
            "comparison {:?} not found on run, using {:?}",
            comparison,
            timer.current_comparison
        );
        timer.current_comparison
    }
}

/// Short display form of a comparison name
pub fn short_name(comparison: &str) -> &str {
    match comparison {
        PERSONAL_BEST => "PB",
        AVERAGE_SEGMENTS => "Average",
        MEDIAN_SEGMENTS => "Median",
        LATEST_RUN => "Latest",
        BALANCED_PB => "Balanced",
        other => other,
    }
}

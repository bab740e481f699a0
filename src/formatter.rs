use crate::services::TimeFormatter;
use crate::time_span::TimeSpan;
use serde::{Deserialize, Serialize};

/// Shown in place of a missing value
pub const DASH: &str = "-";
/// U+2212, wider than a hyphen so signed values line up
pub const MINUS: &str = "\u{2212}";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Accuracy {
    Seconds,
    #[default]
    Tenths,
    Hundredths,
}

/// Unsigned `h:mm:ss.ff`, `m:ss.ff` or `s.ff`. Fractions are truncated.
pub fn format_unsigned(time: TimeSpan, accuracy: Accuracy) -> String {
    let total_ms = time.abs().total_milliseconds();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;

    let whole = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        seconds.to_string()
    };

    match accuracy {
        Accuracy::Seconds => whole,
        Accuracy::Tenths => format!("{}.{}", whole, millis / 100),
        Accuracy::Hundredths => format!("{}.{:02}", whole, millis / 10),
    }
}

/// Signed delta against a comparison, e.g. `+1.2` or `−1:03`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeltaTimeFormatter {
    pub accuracy: Accuracy,
    /// Switch to whole seconds once the delta reaches a minute
    pub drop_decimals: bool,
}

impl DeltaTimeFormatter {
    pub fn new(accuracy: Accuracy, drop_decimals: bool) -> Self {
        Self {
            accuracy,
            drop_decimals,
        }
    }
}

impl TimeFormatter for DeltaTimeFormatter {
    fn format(&self, time: Option<TimeSpan>) -> String {
        let Some(time) = time else {
            return DASH.to_string();
        };
        let accuracy = if self.drop_decimals && time.abs() >= TimeSpan::from_seconds(60.0) {
            Accuracy::Seconds
        } else {
            self.accuracy
        };
        let sign = if time.is_negative() { MINUS } else { "+" };
        format!("{}{}", sign, format_unsigned(time, accuracy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PossibleTimeSaveFormatter {
    pub accuracy: Accuracy,
}

impl PossibleTimeSaveFormatter {
    pub fn new(accuracy: Accuracy) -> Self {
        Self { accuracy }
    }
}

impl TimeFormatter for PossibleTimeSaveFormatter {
    fn format(&self, time: Option<TimeSpan>) -> String {
        match time {
            Some(time) => format_unsigned(time, self.accuracy),
            None => DASH.to_string(),
        }
    }
}

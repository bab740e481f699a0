use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A signed span of time on one of the run's clocks.
///
/// Missing values are never encoded as zero; they are `Option<TimeSpan>` and
/// any arithmetic over an absent operand is absent (use `?` inside a closure
/// or a function returning `Option`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeSpan(chrono::Duration);

impl TimeSpan {
    pub fn zero() -> Self {
        Self(chrono::Duration::zero())
    }

    /// Microsecond precision. Values beyond the representable range saturate
    /// at `±i64::MAX` microseconds and NaN reads as zero.
    pub fn from_seconds(secs: f64) -> Self {
        let micros = (secs * 1_000_000.0).round();
        let micros = if micros.is_nan() {
            0
        } else if micros >= i64::MAX as f64 {
            i64::MAX
        } else if micros <= -(i64::MAX as f64) {
            -i64::MAX
        } else {
            micros as i64
        };
        Self(chrono::Duration::microseconds(micros))
    }

    /// `None` when the sum leaves chrono's duration range
    pub fn checked_add(self, rhs: TimeSpan) -> Option<TimeSpan> {
        self.0.checked_add(&rhs.0).map(TimeSpan)
    }

    /// `None` when the difference leaves chrono's duration range
    pub fn checked_sub(self, rhs: TimeSpan) -> Option<TimeSpan> {
        self.0.checked_sub(&rhs.0).map(TimeSpan)
    }

    pub fn to_duration(self) -> chrono::Duration {
        self.0
    }

    pub fn total_seconds(self) -> f64 {
        match self.0.num_microseconds() {
            Some(us) => us as f64 / 1_000_000.0,
            None => self.0.num_milliseconds() as f64 / 1_000.0,
        }
    }

    pub fn total_milliseconds(self) -> i64 {
        self.0.num_milliseconds()
    }

    pub fn is_negative(self) -> bool {
        self.0 < chrono::Duration::zero()
    }

    /// Magnitude of the span, dropping the sign.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Negative spans become zero; anything else is returned as is.
    pub fn clamp_non_negative(self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            self
        }
    }
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        TimeSpan(-self.0)
    }
}

impl From<f64> for TimeSpan {
    fn from(secs: f64) -> Self {
        TimeSpan::from_seconds(secs)
    }
}

impl From<TimeSpan> for f64 {
    fn from(span: TimeSpan) -> Self {
        span.total_seconds()
    }
}

impl From<chrono::Duration> for TimeSpan {
    fn from(duration: chrono::Duration) -> Self {
        TimeSpan(duration)
    }
}

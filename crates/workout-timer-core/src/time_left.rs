//! Signed time remaining in an interval.
//!
//! [`std::time::Duration`] is unsigned, but a manual-mode countdown keeps
//! running past zero and the overshoot has to be kept until the user
//! advances. [`TimeLeft`] stores signed nanoseconds and only collapses to a
//! `Duration` at the display boundary via [`TimeLeft::magnitude`].

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Signed time remaining, in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeLeft(i128);

impl TimeLeft {
    /// Exactly zero time left.
    pub const ZERO: Self = Self(0);

    /// Positive time left equal to `duration`.
    pub fn from_duration(duration: Duration) -> Self {
        Self(nanos(duration))
    }

    /// Subtract `elapsed`, going negative if needed.
    #[must_use]
    pub fn saturating_sub(self, elapsed: Duration) -> Self {
        Self(self.0.saturating_sub(nanos(elapsed)))
    }

    /// Add `extra`.
    #[must_use]
    pub fn saturating_add(self, extra: Duration) -> Self {
        Self(self.0.saturating_add(nanos(extra)))
    }

    /// True if the countdown has gone past zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// True if some time is still left.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Absolute value as a `Duration`, saturating at `Duration::MAX`.
    pub fn magnitude(self) -> Duration {
        let abs = self.0.unsigned_abs();
        match u64::try_from(abs / NANOS_PER_SEC) {
            Ok(secs) => Duration::new(secs, (abs % NANOS_PER_SEC) as u32),
            // add_time can push past the largest Duration.
            Err(_) => Duration::MAX,
        }
    }

    /// True if `0 < self < threshold`.
    pub fn is_below(self, threshold: Duration) -> bool {
        self.is_positive() && self.0 < nanos(threshold)
    }
}

fn nanos(duration: Duration) -> i128 {
    // u128 nanos of any Duration fit comfortably in i128.
    i128::try_from(duration.as_nanos()).unwrap_or(i128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracting_past_zero_goes_negative() {
        let left = TimeLeft::from_duration(Duration::from_secs(5))
            .saturating_sub(Duration::from_secs(7));

        assert!(left.is_negative());
        assert!(!left.is_positive());
        assert_eq!(left.magnitude(), Duration::from_secs(2));
    }

    #[test]
    fn magnitude_keeps_subsecond_precision() {
        let left = TimeLeft::from_duration(Duration::from_millis(1_500))
            .saturating_sub(Duration::from_millis(1_750));

        assert_eq!(left.magnitude(), Duration::from_millis(250));
    }

    #[test]
    fn is_below_excludes_zero_and_overflow() {
        let threshold = Duration::from_secs(30);

        assert!(TimeLeft::from_duration(Duration::from_secs(10)).is_below(threshold));
        assert!(!TimeLeft::from_duration(Duration::from_secs(30)).is_below(threshold));
        assert!(!TimeLeft::ZERO.is_below(threshold));
        assert!(!TimeLeft::ZERO.saturating_sub(Duration::from_secs(1)).is_below(threshold));
    }

    #[test]
    fn add_recovers_from_overflow() {
        let left = TimeLeft::ZERO
            .saturating_sub(Duration::from_secs(3))
            .saturating_add(Duration::from_secs(30));

        assert_eq!(left, TimeLeft::from_duration(Duration::from_secs(27)));
    }

    #[test]
    fn magnitude_saturates_past_largest_duration() {
        let left = TimeLeft::from_duration(Duration::MAX).saturating_add(Duration::from_secs(30));

        assert!(left.is_positive());
        assert_eq!(left.magnitude(), Duration::MAX);
    }
}

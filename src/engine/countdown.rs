use serde::Serialize;

pub const MS_PER_SECOND: i64 = 1000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CountdownBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownBreakdown {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a positive millisecond span into whole units. Sub-second
    /// remainders are dropped.
    pub fn from_millis(ms: i64) -> Self {
        if ms <= 0 {
            return Self::ZERO;
        }
        let ms = ms as u64;
        Self {
            days: ms / MS_PER_DAY as u64,
            hours: (ms / MS_PER_HOUR as u64) % 24,
            minutes: (ms / MS_PER_MINUTE as u64) % 60,
            seconds: (ms / MS_PER_SECOND as u64) % 60,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Time left until the final reference date. After the target passes the
/// numbers read zero and `complete` flips; they never freeze at a stale value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub remaining: CountdownBreakdown,
    pub complete: bool,
}

impl Countdown {
    pub fn from_delta_millis(delta: i64) -> Self {
        if delta > 0 {
            Self {
                remaining: CountdownBreakdown::from_millis(delta),
                complete: false,
            }
        } else {
            Self {
                remaining: CountdownBreakdown::ZERO,
                complete: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_second() {
        assert_eq!(
            CountdownBreakdown::from_millis(1000),
            CountdownBreakdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_sub_second_rounds_down() {
        assert_eq!(CountdownBreakdown::from_millis(999), CountdownBreakdown::ZERO);
        let c = Countdown::from_delta_millis(999);
        assert!(!c.complete);
        assert_eq!(c.remaining, CountdownBreakdown::ZERO);
    }

    #[test]
    fn test_mixed_units() {
        let ms = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 789;
        let b = CountdownBreakdown::from_millis(ms);
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (3, 4, 5, 6));
        assert_eq!(b.total_seconds() as i64, ms / 1000);
    }

    #[test]
    fn test_non_positive_delta_is_complete() {
        for delta in [0, -1, -MS_PER_DAY * 400] {
            let c = Countdown::from_delta_millis(delta);
            assert!(c.complete);
            assert_eq!(c.remaining, CountdownBreakdown::ZERO);
        }
    }
}

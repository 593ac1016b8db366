use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::countdown::MS_PER_DAY;
use crate::engine::dots::Dots;
use crate::engine::reference::ReferenceDates;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TermProgress {
    /// Dots in the first period, election day through the first term end.
    pub first_period_days: i64,
    pub second_period_days: i64,
    pub current_day_index: i64,
    pub days_since_start: i64,
    /// Whole days (rounded up) until the first term ends, counted from now.
    /// Goes negative once it has passed.
    pub first_period_remaining_days: i64,
}

impl TermProgress {
    pub fn compute(now: DateTime<Utc>, refs: &ReferenceDates) -> Self {
        let days_since_start = floor_days(millis_between(refs.election, now)).max(0);
        Self {
            first_period_days: ceil_days(millis_between(refs.election, refs.first_end)),
            second_period_days: ceil_days(millis_between(refs.first_end, refs.second_end)),
            current_day_index: days_since_start,
            days_since_start,
            first_period_remaining_days: ceil_days(millis_between(now, refs.first_end)),
        }
    }

    pub fn total_days(&self) -> usize {
        (self.first_period_days + self.second_period_days).max(0) as usize
    }

    pub fn dots(&self) -> Dots {
        Dots::new(self.total_days(), self.first_period_days, self.current_day_index)
    }
}

/// Signed milliseconds from `from` to `to`.
pub fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    to.signed_duration_since(from).num_milliseconds()
}

pub fn floor_days(ms: i64) -> i64 {
    ms.div_euclid(MS_PER_DAY)
}

pub fn ceil_days(ms: i64) -> i64 {
    -(-ms).div_euclid(MS_PER_DAY)
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::countdown::Countdown;
use crate::engine::progress::{TermProgress, millis_between};
use crate::engine::reference::ReferenceDates;

/// One tick's worth of derived values. Published whole; never patched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedState {
    pub computed_at: DateTime<Utc>,
    pub countdown: Countdown,
    pub progress: TermProgress,
}

pub fn compute_derived(now: DateTime<Utc>, refs: &ReferenceDates) -> DerivedState {
    DerivedState {
        computed_at: now,
        countdown: Countdown::from_delta_millis(millis_between(now, refs.second_end)),
        progress: TermProgress::compute(now, refs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::countdown::CountdownBreakdown;
    use crate::engine::dots::{DotState, Period};
    use chrono::{Duration, TimeZone};

    fn refs() -> ReferenceDates {
        ReferenceDates::in_zone(&Utc).unwrap()
    }

    #[test]
    fn test_reconstructs_remaining_seconds() {
        let r = refs();
        let mut now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::milliseconds(123);
        while now < r.second_end {
            let d = compute_derived(now, &r);
            assert!(!d.countdown.complete);
            let expected = (r.second_end - now).num_milliseconds().div_euclid(1000);
            assert_eq!(d.countdown.remaining.total_seconds() as i64, expected);
            assert!(d.countdown.remaining.hours < 24);
            assert!(d.countdown.remaining.minutes < 60);
            assert!(d.countdown.remaining.seconds < 60);
            now += Duration::milliseconds(7_919_311_777);
        }
    }

    #[test]
    fn test_one_second_before_end() {
        let r = refs();
        let d = compute_derived(r.second_end - Duration::seconds(1), &r);
        assert_eq!(
            d.countdown.remaining,
            CountdownBreakdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
        assert!(!d.countdown.complete);
    }

    #[test]
    fn test_at_and_after_end_reads_zero() {
        let r = refs();
        for now in [r.second_end, r.second_end + Duration::days(30)] {
            let d = compute_derived(now, &r);
            assert!(d.countdown.complete);
            assert_eq!(d.countdown.remaining, CountdownBreakdown::ZERO);
        }
    }

    #[test]
    fn test_election_day_scenario() {
        let r = refs();
        let d = compute_derived(r.election, &r);
        assert_eq!(d.progress.days_since_start, 0);
        assert_eq!(d.progress.current_day_index, 0);
        assert_eq!(
            d.progress.dots().next(),
            Some(DotState::Current(Period::First))
        );
    }

    #[test]
    fn test_first_term_end_boundary() {
        let r = refs();
        let d = compute_derived(r.first_end, &r);
        let first = d.progress.first_period_days as usize;
        let dots: Vec<DotState> = d.progress.dots().collect();
        assert_eq!(d.progress.current_day_index, 76);
        assert_eq!(dots[first - 2], DotState::Past(Period::First));
        assert_eq!(dots[first - 1], DotState::Current(Period::First));
        assert_eq!(dots[first], DotState::Future(Period::Second));

        let d = compute_derived(r.first_end + Duration::hours(12), &r);
        let dots: Vec<DotState> = d.progress.dots().collect();
        assert_eq!(dots[first - 1], DotState::Past(Period::First));
        assert_eq!(dots[first], DotState::Current(Period::Second));
        assert_eq!(dots[first + 1], DotState::Future(Period::Second));
    }

    #[test]
    fn test_one_classification_per_dot() {
        let r = refs();
        let mut now = r.election - Duration::days(10);
        while now < r.second_end + Duration::days(10) {
            let d = compute_derived(now, &r);
            let dots: Vec<DotState> = d.progress.dots().collect();
            assert_eq!(dots.len(), d.progress.total_days());
            assert!(dots.iter().filter(|s| s.is_current()).count() <= 1);
            now += Duration::hours(301);
        }
    }

    #[test]
    fn test_never_negative_before_election() {
        let r = refs();
        let d = compute_derived(r.election - Duration::days(5000), &r);
        assert_eq!(d.progress.days_since_start, 0);
        assert_eq!(d.progress.current_day_index, 0);
        let d = compute_derived(r.election - Duration::milliseconds(1), &r);
        assert_eq!(d.progress.days_since_start, 0);
    }
}

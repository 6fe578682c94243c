//! Tests for the Active/Closed lifecycle period

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{ActivePeriod, LifecycleState, TemporalError};
use core_kernel::temporal::resolve_end;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 9, 12, 7, 44).unwrap()
}

mod transitions {
    use super::*;

    #[test]
    fn test_explicit_end_date_is_kept() {
        let mut period = ActivePeriod::starting_at(base());
        let requested = base() + Duration::days(30);

        let end = period.close(Some(requested), base() + Duration::days(1)).unwrap();

        assert_eq!(end, requested);
        assert_eq!(period.state(), LifecycleState::Closed);
    }

    #[test]
    fn test_back_dated_end_is_accepted() {
        let mut period = ActivePeriod::starting_at(base());
        let requested = base() - Duration::days(1);

        assert!(period.close(Some(requested), base()).is_ok());
        assert_eq!(period.end, Some(requested));
    }

    #[test]
    fn test_from_parts_restores_closed_state() {
        let period = ActivePeriod::from_parts(base(), Some(base()));
        assert!(!period.is_active());
    }

    #[test]
    fn test_resolve_end_prefers_request() {
        let now = base();
        let requested = base() + Duration::hours(2);
        assert_eq!(resolve_end(Some(requested), now), requested);
        assert_eq!(resolve_end(None, now), now);
    }
}

proptest! {
    #[test]
    fn closing_a_closed_period_always_fails(
        first_offset in -10_000i64..10_000i64,
        second_offset in proptest::option::of(-10_000i64..10_000i64),
    ) {
        let mut period = ActivePeriod::starting_at(base());
        let first_end = base() + Duration::minutes(first_offset);
        period.close(Some(first_end), base()).unwrap();

        let requested = second_offset.map(|m| base() + Duration::minutes(m));
        let result = period.close(requested, base() + Duration::days(1));

        prop_assert_eq!(result, Err(TemporalError::AlreadyClosed { ended_at: first_end }));
        prop_assert_eq!(period.end, Some(first_end));
    }

    #[test]
    fn closing_without_request_uses_now(offset in 0i64..1_000_000i64) {
        let mut period = ActivePeriod::starting_at(base());
        let now = base() + Duration::seconds(offset);
        prop_assert_eq!(period.close(None, now), Ok(now));
    }
}

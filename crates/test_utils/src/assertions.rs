//! Custom Test Assertions
//!
//! Lifecycle assertions with messages that name the entity.

use chrono::{DateTime, Utc};
use core_kernel::{ActivePeriod, LifecycleState};
use domain_klant::Klant;
use domain_opstal::Opstalverzekering;

/// Asserts that a period has no end date
pub fn assert_period_active(period: &ActivePeriod, what: &str) {
    assert_eq!(
        period.state(),
        LifecycleState::Active,
        "Expected {} to be active, but it ended at {:?}",
        what,
        period.end
    );
}

/// Asserts that a period ended exactly at `expected`
pub fn assert_period_closed_at(period: &ActivePeriod, expected: DateTime<Utc>, what: &str) {
    assert_eq!(
        period.end,
        Some(expected),
        "Expected {} to end at {}, got {:?}",
        what,
        expected,
        period.end
    );
}

pub fn assert_klant_active(klant: &Klant) {
    assert_period_active(&klant.relatie, &format!("klant {}", klant.id));
}

pub fn assert_klant_closed_at(klant: &Klant, expected: DateTime<Utc>) {
    assert_period_closed_at(&klant.relatie, expected, &format!("klant {}", klant.id));
}

pub fn assert_verzekering_active(verzekering: &Opstalverzekering) {
    assert_period_active(
        &verzekering.looptijd,
        &format!("polis {}", verzekering.polis_nummer),
    );
}

/// Asserts that every policy in `verzekeringen` is active and that their
/// numbers are exactly `expected`, in any order
pub fn assert_active_polis_nummers(verzekeringen: &[Opstalverzekering], expected: &[i32]) {
    for verzekering in verzekeringen {
        assert_verzekering_active(verzekering);
    }

    let mut actual: Vec<i32> = verzekeringen.iter().map(|v| v.polis_nummer).collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "Unexpected set of policy numbers");
}

//! Property-Based Test Generators
//!
//! proptest strategies producing values that pass input validation.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_klant::NieuweKlant;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Valid amounts: zero up to ten integral digits, two decimals
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)).unwrap())
}

/// Amounts with three to six decimals that are not whole cents
pub fn too_precise_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64, 3u32..=6u32)
        .prop_filter("must not reduce to two decimals", |(n, scale)| {
            n % 10i64.pow(scale - 2) != 0
        })
        .prop_map(|(n, scale)| Decimal::new(n, scale))
}

/// Coverage type labels within the column limit
pub fn type_dekking_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z -]{0,74}"
}

pub fn polis_nummer_strategy() -> impl Strategy<Value = i32> {
    1i32..i32::MAX
}

/// Valid customer input
pub fn nieuwe_klant_strategy() -> impl Strategy<Value = NieuweKlant> {
    (
        "[A-Z][a-z]{1,20}",
        proptest::option::of("(van|de|van der|ter)"),
        "[A-Z][a-z]{1,30}",
        0i64..30_000,
        "[A-Z][a-z]{2,40}",
    )
        .prop_map(|(voornaam, tussenvoegsel, achternaam, days, woonplaats)| {
            let base = NaiveDate::from_ymd_opt(1930, 1, 1).unwrap();
            NieuweKlant {
                voornaam,
                tussenvoegsel,
                achternaam,
                geboortedatum: base + chrono::Duration::days(days),
                woonplaats,
            }
        })
}

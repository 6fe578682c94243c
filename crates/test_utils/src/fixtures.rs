//! Pre-built Test Fixtures
//!
//! Consistent, predictable customers and policies for unit and contract
//! tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{KlantId, Money};
use domain_klant::NieuweKlant;
use domain_opstal::NieuweOpstalverzekering;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for fixed points in time
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant test clocks are frozen at
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 9, 12, 7, 44).unwrap()
    }

    /// An explicit end date at the end of the year
    pub fn end_of_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap()
    }
}

/// Fixture for amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn eur(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    pub fn herbouwwaarde() -> Money {
        Self::eur(dec!(350000))
    }

    pub fn inboedelwaarde() -> Money {
        Self::eur(dec!(50000))
    }

    pub fn premie() -> Money {
        Self::eur(dec!(45.99))
    }
}

/// Fixture for customers
pub struct KlantFixtures;

impl KlantFixtures {
    /// Jan van Dijk from Zwolle
    pub fn jan_van_dijk() -> NieuweKlant {
        NieuweKlant {
            voornaam: "Jan".to_string(),
            tussenvoegsel: Some("van".to_string()),
            achternaam: "Dijk".to_string(),
            geboortedatum: NaiveDate::from_ymd_opt(1985, 3, 21).unwrap(),
            woonplaats: "Zwolle".to_string(),
        }
    }

    pub fn anna_de_boer() -> NieuweKlant {
        NieuweKlant {
            voornaam: "Anna".to_string(),
            tussenvoegsel: None,
            achternaam: "De Boer".to_string(),
            geboortedatum: NaiveDate::from_ymd_opt(1992, 2, 2).unwrap(),
            woonplaats: "Zwolle".to_string(),
        }
    }

    pub fn piet_jansen() -> NieuweKlant {
        NieuweKlant {
            voornaam: "Piet".to_string(),
            tussenvoegsel: None,
            achternaam: "Jansen".to_string(),
            geboortedatum: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            woonplaats: "Zwolle".to_string(),
        }
    }
}

/// Fixture for policies
pub struct PolisFixtures;

impl PolisFixtures {
    /// Fully specified "All-risk" policy number 1001
    pub fn all_risk(klant_id: KlantId) -> NieuweOpstalverzekering {
        NieuweOpstalverzekering {
            polis_nummer: 1001,
            klant_id,
            type_dekking: "All-risk".to_string(),
            gedekte_gebeurtenissen: Some("Brand, storm".to_string()),
            uitsluitingen: Some("Achterstallig onderhoud".to_string()),
            herbouwwaarde: MoneyFixtures::herbouwwaarde(),
            inboedelwaarde: MoneyFixtures::inboedelwaarde(),
            premie: MoneyFixtures::premie(),
            betaaltermijn: "Maandelijks".to_string(),
            aanvullende_opties: Some("Glasverzekering".to_string()),
        }
    }

    /// Minimal "Basis" policy number 2002 without optional texts
    pub fn basis(klant_id: KlantId) -> NieuweOpstalverzekering {
        NieuweOpstalverzekering {
            polis_nummer: 2002,
            klant_id,
            type_dekking: "Basis".to_string(),
            gedekte_gebeurtenissen: None,
            uitsluitingen: None,
            herbouwwaarde: MoneyFixtures::eur(dec!(100000)),
            inboedelwaarde: MoneyFixtures::eur(dec!(20000)),
            premie: MoneyFixtures::eur(dec!(20)),
            betaaltermijn: "Maandelijks".to_string(),
            aanvullende_opties: None,
        }
    }
}

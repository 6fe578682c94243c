//! Test Data Builders
//!
//! Builders fill in generated names and cities so tests only spell out the
//! fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use fake::faker::address::raw::CityName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;

use core_kernel::{KlantId, Money};
use domain_klant::{Klant, NieuweKlant};
use domain_opstal::{NieuweOpstalverzekering, Opstalverzekering};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for customers
pub struct KlantBuilder {
    nieuw: NieuweKlant,
    begin_datum: DateTime<Utc>,
    eind_datum: Option<DateTime<Utc>>,
}

impl Default for KlantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KlantBuilder {
    /// Creates a builder with a generated name and city
    pub fn new() -> Self {
        Self {
            nieuw: NieuweKlant {
                voornaam: FirstName(EN).fake(),
                tussenvoegsel: None,
                achternaam: LastName(EN).fake(),
                geboortedatum: NaiveDate::from_ymd_opt(1980, 6, 15).unwrap(),
                woonplaats: CityName(EN).fake(),
            },
            begin_datum: TemporalFixtures::now(),
            eind_datum: None,
        }
    }

    pub fn with_naam(mut self, voornaam: &str, achternaam: &str) -> Self {
        self.nieuw.voornaam = voornaam.to_string();
        self.nieuw.achternaam = achternaam.to_string();
        self
    }

    pub fn with_tussenvoegsel(mut self, tussenvoegsel: &str) -> Self {
        self.nieuw.tussenvoegsel = Some(tussenvoegsel.to_string());
        self
    }

    pub fn with_woonplaats(mut self, woonplaats: &str) -> Self {
        self.nieuw.woonplaats = woonplaats.to_string();
        self
    }

    pub fn with_begin_datum(mut self, begin_datum: DateTime<Utc>) -> Self {
        self.begin_datum = begin_datum;
        self
    }

    /// Builds an already ended customer
    pub fn beeindigd_op(mut self, eind_datum: DateTime<Utc>) -> Self {
        self.eind_datum = Some(eind_datum);
        self
    }

    /// Returns the creation input
    pub fn build_nieuw(self) -> NieuweKlant {
        self.nieuw
    }

    /// Returns a stored-looking customer, ready to seed a port
    pub fn build(self) -> Klant {
        let mut klant = Klant::new(self.nieuw, self.begin_datum);
        klant.relatie.end = self.eind_datum;
        klant
    }
}

/// Builder for building insurance policies
pub struct OpstalverzekeringBuilder {
    nieuw: NieuweOpstalverzekering,
    begin_datum: DateTime<Utc>,
    eind_datum: Option<DateTime<Utc>>,
}

impl OpstalverzekeringBuilder {
    /// Creates a builder for a "Basis" policy of the given customer
    pub fn new(klant_id: KlantId) -> Self {
        Self {
            nieuw: NieuweOpstalverzekering {
                polis_nummer: (1..1_000_000).fake(),
                klant_id,
                type_dekking: "Basis".to_string(),
                gedekte_gebeurtenissen: None,
                uitsluitingen: None,
                herbouwwaarde: MoneyFixtures::herbouwwaarde(),
                inboedelwaarde: MoneyFixtures::inboedelwaarde(),
                premie: MoneyFixtures::premie(),
                betaaltermijn: "Maandelijks".to_string(),
                aanvullende_opties: None,
            },
            begin_datum: TemporalFixtures::now(),
            eind_datum: None,
        }
    }

    pub fn with_polis_nummer(mut self, polis_nummer: i32) -> Self {
        self.nieuw.polis_nummer = polis_nummer;
        self
    }

    pub fn with_type_dekking(mut self, type_dekking: &str) -> Self {
        self.nieuw.type_dekking = type_dekking.to_string();
        self
    }

    pub fn with_premie(mut self, premie: Money) -> Self {
        self.nieuw.premie = premie;
        self
    }

    pub fn with_betaaltermijn(mut self, betaaltermijn: &str) -> Self {
        self.nieuw.betaaltermijn = betaaltermijn.to_string();
        self
    }

    /// Builds an already ended policy
    pub fn beeindigd_op(mut self, eind_datum: DateTime<Utc>) -> Self {
        self.eind_datum = Some(eind_datum);
        self
    }

    /// Returns the creation input
    pub fn build_nieuw(self) -> NieuweOpstalverzekering {
        self.nieuw
    }

    /// Returns a stored-looking policy, ready to seed a port
    pub fn build(self) -> Opstalverzekering {
        let mut verzekering = Opstalverzekering::new(self.nieuw, self.begin_datum);
        verzekering.looptijd.end = self.eind_datum;
        verzekering
    }
}

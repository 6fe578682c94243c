//! Customer entity
//!
//! A [`Klant`] is created once from a [`NieuweKlant`] and afterwards only
//! changes through [`Klant::beeindig`], which sets the relationship end date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{not_blank, ActivePeriod, KlantId, LifecycleState};
use crate::error::KlantError;

/// Input for creating a customer
///
/// Length limits mirror the storage columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NieuweKlant {
    /// First name
    #[validate(
        length(min = 1, max = 100, message = "is verplicht en maximaal 100 tekens"),
        custom(function = "not_blank")
    )]
    pub voornaam: String,
    /// Name infix such as "van" or "de"
    #[validate(length(max = 50, message = "is maximaal 50 tekens"))]
    pub tussenvoegsel: Option<String>,
    /// Last name
    #[validate(
        length(min = 1, max = 100, message = "is verplicht en maximaal 100 tekens"),
        custom(function = "not_blank")
    )]
    pub achternaam: String,
    pub geboortedatum: NaiveDate,
    /// City of residence
    #[validate(
        length(min = 1, max = 150, message = "is verplicht en maximaal 150 tekens"),
        custom(function = "not_blank")
    )]
    pub woonplaats: String,
}

/// A customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Klant {
    pub id: KlantId,
    pub voornaam: String,
    pub tussenvoegsel: Option<String>,
    pub achternaam: String,
    pub geboortedatum: NaiveDate,
    pub woonplaats: String,
    /// Relationship start and end
    #[serde(flatten)]
    pub relatie: ActivePeriod,
}

impl Klant {
    /// Creates a new, active customer whose relationship starts at `now`
    pub fn new(nieuw: NieuweKlant, now: DateTime<Utc>) -> Self {
        Self {
            id: KlantId::new_v7(),
            voornaam: nieuw.voornaam,
            tussenvoegsel: nieuw.tussenvoegsel,
            achternaam: nieuw.achternaam,
            geboortedatum: nieuw.geboortedatum,
            woonplaats: nieuw.woonplaats,
            relatie: ActivePeriod::starting_at(now),
        }
    }

    /// Returns true while the customer relationship has no end date
    pub fn is_active(&self) -> bool {
        self.relatie.is_active()
    }

    pub fn state(&self) -> LifecycleState {
        self.relatie.state()
    }

    pub fn begin_datum(&self) -> DateTime<Utc> {
        self.relatie.begin
    }

    pub fn eind_datum(&self) -> Option<DateTime<Utc>> {
        self.relatie.end
    }

    /// Returns the full name, including the infix when present
    ///
    /// # Returns
    ///
    /// Name in "Voornaam Tussenvoegsel Achternaam" format
    pub fn volledige_naam(&self) -> String {
        match self.tussenvoegsel.as_deref().filter(|t| !t.is_empty()) {
            Some(tussenvoegsel) => {
                format!("{} {} {}", self.voornaam, tussenvoegsel, self.achternaam)
            }
            None => format!("{} {}", self.voornaam, self.achternaam),
        }
    }

    /// Ends the customer relationship
    ///
    /// # Arguments
    ///
    /// * `requested` - Explicit end date, or None to end at `now`
    /// * `now` - Current time from the injected clock
    ///
    /// # Errors
    ///
    /// Returns `KlantError::EindDatumAlGezet` if the relationship was
    /// already ended.
    pub fn beeindig(
        &mut self,
        requested: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, KlantError> {
        self.relatie
            .close(requested, now)
            .map_err(|_| KlantError::EindDatumAlGezet)
    }
}

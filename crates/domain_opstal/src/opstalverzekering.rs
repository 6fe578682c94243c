//! Building insurance policy entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{not_blank, ActivePeriod, KlantId, LifecycleState, Money, OpstalverzekeringId};
use crate::error::OpstalError;

/// Input for writing a new building insurance policy
///
/// Amounts are validated to two decimal places when deserialized; text
/// limits mirror the storage columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NieuweOpstalverzekering {
    pub polis_nummer: i32,
    pub klant_id: KlantId,
    /// Coverage type label, e.g. "All-risk" or "Basis"
    #[validate(
        length(min = 1, max = 75, message = "is verplicht en maximaal 75 tekens"),
        custom(function = "not_blank")
    )]
    pub type_dekking: String,
    /// Covered perils
    #[validate(length(max = 255, message = "is maximaal 255 tekens"))]
    pub gedekte_gebeurtenissen: Option<String>,
    /// Exclusions
    #[validate(length(max = 255, message = "is maximaal 255 tekens"))]
    pub uitsluitingen: Option<String>,
    /// Rebuild value of the building
    pub herbouwwaarde: Money,
    /// Value of the contents
    pub inboedelwaarde: Money,
    pub premie: Money,
    /// Payment frequency label, e.g. "Maandelijks"
    #[validate(
        length(min = 1, max = 50, message = "is verplicht en maximaal 50 tekens"),
        custom(function = "not_blank")
    )]
    pub betaaltermijn: String,
    #[validate(length(max = 255, message = "is maximaal 255 tekens"))]
    pub aanvullende_opties: Option<String>,
}

/// A building insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opstalverzekering {
    pub id: OpstalverzekeringId,
    pub polis_nummer: i32,
    /// The customer this policy belongs to
    pub klant_id: KlantId,
    pub type_dekking: String,
    pub gedekte_gebeurtenissen: Option<String>,
    pub uitsluitingen: Option<String>,
    pub herbouwwaarde: Money,
    pub inboedelwaarde: Money,
    pub premie: Money,
    pub betaaltermijn: String,
    pub aanvullende_opties: Option<String>,
    /// Policy start and end
    #[serde(flatten)]
    pub looptijd: ActivePeriod,
}

impl Opstalverzekering {
    /// Creates a new, active policy starting at `now`
    pub fn new(nieuw: NieuweOpstalverzekering, now: DateTime<Utc>) -> Self {
        Self {
            id: OpstalverzekeringId::new_v7(),
            polis_nummer: nieuw.polis_nummer,
            klant_id: nieuw.klant_id,
            type_dekking: nieuw.type_dekking,
            gedekte_gebeurtenissen: nieuw.gedekte_gebeurtenissen,
            uitsluitingen: nieuw.uitsluitingen,
            herbouwwaarde: nieuw.herbouwwaarde,
            inboedelwaarde: nieuw.inboedelwaarde,
            premie: nieuw.premie,
            betaaltermijn: nieuw.betaaltermijn,
            aanvullende_opties: nieuw.aanvullende_opties,
            looptijd: ActivePeriod::starting_at(now),
        }
    }

    /// Returns true while the policy has no end date
    pub fn is_active(&self) -> bool {
        self.looptijd.is_active()
    }

    pub fn state(&self) -> LifecycleState {
        self.looptijd.state()
    }

    pub fn begin_datum(&self) -> DateTime<Utc> {
        self.looptijd.begin
    }

    pub fn eind_datum(&self) -> Option<DateTime<Utc>> {
        self.looptijd.end
    }

    /// Ends the policy
    ///
    /// # Errors
    ///
    /// Returns `OpstalError::EindDatumAlGezet` if the policy already ended.
    pub fn beeindig(
        &mut self,
        requested: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, OpstalError> {
        self.looptijd
            .close(requested, now)
            .map_err(|_| OpstalError::EindDatumAlGezet)
    }
}

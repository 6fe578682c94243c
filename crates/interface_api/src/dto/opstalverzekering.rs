//! Opstalverzekering DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{KlantId, Money};
use domain_opstal::{NieuweOpstalverzekering, Opstalverzekering};

/// Body of `POST /api/opstalverzekeringen`
///
/// Amounts accept JSON numbers or strings and are rejected with more than
/// two decimal places.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpstalverzekeringRequest {
    pub polis_nummer: i32,
    pub klant_id: Uuid,
    pub type_dekking: String,
    #[serde(default)]
    pub gedekte_gebeurtenissen: Option<String>,
    #[serde(default)]
    pub uitsluitingen: Option<String>,
    pub herbouwwaarde: Money,
    pub inboedelwaarde: Money,
    pub premie: Money,
    pub betaaltermijn: String,
    #[serde(default)]
    pub aanvullende_opties: Option<String>,
}

impl From<CreateOpstalverzekeringRequest> for NieuweOpstalverzekering {
    fn from(request: CreateOpstalverzekeringRequest) -> Self {
        NieuweOpstalverzekering {
            polis_nummer: request.polis_nummer,
            klant_id: KlantId::from_uuid(request.klant_id),
            type_dekking: request.type_dekking,
            gedekte_gebeurtenissen: request.gedekte_gebeurtenissen,
            uitsluitingen: request.uitsluitingen,
            herbouwwaarde: request.herbouwwaarde,
            inboedelwaarde: request.inboedelwaarde,
            premie: request.premie,
            betaaltermijn: request.betaaltermijn,
            aanvullende_opties: request.aanvullende_opties,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpstalverzekeringResponse {
    pub id: Uuid,
    pub polis_nummer: i32,
    pub klant_id: Uuid,
    pub type_dekking: String,
    pub gedekte_gebeurtenissen: Option<String>,
    pub uitsluitingen: Option<String>,
    pub herbouwwaarde: Decimal,
    pub inboedelwaarde: Decimal,
    pub premie: Decimal,
    pub betaaltermijn: String,
    pub aanvullende_opties: Option<String>,
    pub begin_datum: DateTime<Utc>,
    pub eind_datum: Option<DateTime<Utc>>,
}

impl From<Opstalverzekering> for OpstalverzekeringResponse {
    fn from(verzekering: Opstalverzekering) -> Self {
        Self {
            id: *verzekering.id.as_uuid(),
            polis_nummer: verzekering.polis_nummer,
            klant_id: *verzekering.klant_id.as_uuid(),
            begin_datum: verzekering.begin_datum(),
            eind_datum: verzekering.eind_datum(),
            herbouwwaarde: verzekering.herbouwwaarde.amount(),
            inboedelwaarde: verzekering.inboedelwaarde.amount(),
            premie: verzekering.premie.amount(),
            type_dekking: verzekering.type_dekking,
            gedekte_gebeurtenissen: verzekering.gedekte_gebeurtenissen,
            uitsluitingen: verzekering.uitsluitingen,
            betaaltermijn: verzekering.betaaltermijn,
            aanvullende_opties: verzekering.aanvullende_opties,
        }
    }
}

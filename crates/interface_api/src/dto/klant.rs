//! Klant DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_klant::{Klant, NieuweKlant};

/// Body of `POST /api/klanten`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKlantRequest {
    pub voornaam: String,
    #[serde(default)]
    pub tussenvoegsel: Option<String>,
    pub achternaam: String,
    pub geboortedatum: NaiveDate,
    pub woonplaats: String,
}

impl From<CreateKlantRequest> for NieuweKlant {
    fn from(request: CreateKlantRequest) -> Self {
        NieuweKlant {
            voornaam: request.voornaam,
            tussenvoegsel: request.tussenvoegsel,
            achternaam: request.achternaam,
            geboortedatum: request.geboortedatum,
            woonplaats: request.woonplaats,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlantResponse {
    pub id: Uuid,
    pub voornaam: String,
    pub tussenvoegsel: Option<String>,
    pub achternaam: String,
    pub geboortedatum: NaiveDate,
    pub woonplaats: String,
    pub begin_datum: DateTime<Utc>,
    pub eind_datum: Option<DateTime<Utc>>,
}

impl From<Klant> for KlantResponse {
    fn from(klant: Klant) -> Self {
        Self {
            id: *klant.id.as_uuid(),
            begin_datum: klant.begin_datum(),
            eind_datum: klant.eind_datum(),
            voornaam: klant.voornaam,
            tussenvoegsel: klant.tussenvoegsel,
            achternaam: klant.achternaam,
            geboortedatum: klant.geboortedatum,
            woonplaats: klant.woonplaats,
        }
    }
}

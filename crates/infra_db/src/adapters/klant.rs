//! PostgreSQL Klant Adapter
//!
//! Implements `KlantPort` on top of `KlantRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ActivePeriod, DomainPort, HealthCheckResult, HealthCheckable, KlantId, PortError};
use domain_klant::{Klant, KlantPort};

use crate::repositories::klant::{KlantRepository, KlantRow};

/// PostgreSQL-backed implementation of the KlantPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::Conflict` -> `PortError::Conflict`
/// - Connection failures -> `PortError::Connection`
#[derive(Debug, Clone)]
pub struct PostgresKlantAdapter {
    repository: KlantRepository,
    pool: PgPool,
}

impl PostgresKlantAdapter {
    /// Creates a new PostgreSQL customer adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: KlantRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &KlantRepository {
        &self.repository
    }
}

impl DomainPort for PostgresKlantAdapter {}

#[async_trait]
impl HealthCheckable for PostgresKlantAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-klant-adapter").await
    }
}

#[async_trait]
impl KlantPort for PostgresKlantAdapter {
    #[instrument(skip(self, klant), fields(klant_id = %klant.id))]
    async fn insert_klant(&self, klant: &Klant) -> Result<Klant, PortError> {
        debug!("Inserting klant");

        let row = self.repository.insert(&klant_to_row(klant)).await?;
        Ok(row_to_klant(row))
    }

    #[instrument(skip(self), fields(klant_id = %id))]
    async fn get_klant(&self, id: KlantId) -> Result<Klant, PortError> {
        debug!("Fetching klant by ID");

        self.repository
            .get_by_id(*id.as_uuid())
            .await
            .map(row_to_klant)
            .map_err(|e| {
                if e.is_not_found() {
                    PortError::not_found("Klant", id)
                } else {
                    e.into()
                }
            })
    }

    #[instrument(skip(self), fields(klant_id = %id, eind_datum = %eind_datum))]
    async fn close_klant(
        &self,
        id: KlantId,
        eind_datum: DateTime<Utc>,
    ) -> Result<Klant, PortError> {
        debug!("Closing klant");

        self.repository
            .close(*id.as_uuid(), eind_datum)
            .await
            .map(row_to_klant)
            .map_err(|e| {
                if e.is_not_found() {
                    PortError::not_found("Klant", id)
                } else {
                    e.into()
                }
            })
    }
}

fn klant_to_row(klant: &Klant) -> KlantRow {
    KlantRow {
        id: *klant.id.as_uuid(),
        voornaam: klant.voornaam.clone(),
        tussenvoegsel: klant.tussenvoegsel.clone(),
        achternaam: klant.achternaam.clone(),
        geboortedatum: klant.geboortedatum,
        woonplaats: klant.woonplaats.clone(),
        begin_datum: klant.relatie.begin,
        eind_datum: klant.relatie.end,
    }
}

fn row_to_klant(row: KlantRow) -> Klant {
    Klant {
        id: KlantId::from_uuid(row.id),
        voornaam: row.voornaam,
        tussenvoegsel: row.tussenvoegsel,
        achternaam: row.achternaam,
        geboortedatum: row.geboortedatum,
        woonplaats: row.woonplaats,
        relatie: ActivePeriod::from_parts(row.begin_datum, row.eind_datum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use domain_klant::NieuweKlant;

    #[test]
    fn test_row_conversion_roundtrip() {
        let mut klant = Klant::new(
            NieuweKlant {
                voornaam: "Jan".to_string(),
                tussenvoegsel: Some("van".to_string()),
                achternaam: "Dijk".to_string(),
                geboortedatum: NaiveDate::from_ymd_opt(1985, 3, 21).unwrap(),
                woonplaats: "Zwolle".to_string(),
            },
            Utc.with_ymd_and_hms(2026, 1, 9, 12, 0, 0).unwrap(),
        );
        klant.relatie.end = Some(Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap());

        assert_eq!(row_to_klant(klant_to_row(&klant)), klant);
    }
}

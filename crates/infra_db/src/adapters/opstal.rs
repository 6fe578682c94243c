//! PostgreSQL Opstalverzekering Adapter
//!
//! Implements `OpstalverzekeringPort` on top of `OpstalverzekeringRepository`.
//! Amounts read back from `NUMERIC(12,2)` columns are re-validated as `Money`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    ActivePeriod, DomainPort, HealthCheckResult, HealthCheckable, KlantId, Money,
    OpstalverzekeringId, PortError,
};
use domain_opstal::{Opstalverzekering, OpstalverzekeringPort, VerzekeringQuery};

use crate::error::DatabaseError;
use crate::repositories::opstal::{
    OpstalverzekeringFilter, OpstalverzekeringRepository, OpstalverzekeringRow,
};

/// PostgreSQL-backed implementation of the OpstalverzekeringPort trait
///
/// A duplicate policy number is reported as `PortError::Conflict`, as is
/// closing a policy that already has an end date.
#[derive(Debug, Clone)]
pub struct PostgresOpstalverzekeringAdapter {
    repository: OpstalverzekeringRepository,
    pool: PgPool,
}

impl PostgresOpstalverzekeringAdapter {
    /// Creates a new PostgreSQL policy adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OpstalverzekeringRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &OpstalverzekeringRepository {
        &self.repository
    }
}

impl DomainPort for PostgresOpstalverzekeringAdapter {}

#[async_trait]
impl HealthCheckable for PostgresOpstalverzekeringAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-opstalverzekering-adapter").await
    }
}

#[async_trait]
impl OpstalverzekeringPort for PostgresOpstalverzekeringAdapter {
    #[instrument(
        skip(self, verzekering),
        fields(verzekering_id = %verzekering.id, polis_nummer = verzekering.polis_nummer)
    )]
    async fn insert_verzekering(
        &self,
        verzekering: &Opstalverzekering,
    ) -> Result<Opstalverzekering, PortError> {
        debug!("Inserting opstalverzekering");

        let row = self
            .repository
            .insert(&verzekering_to_row(verzekering))
            .await?;
        row_to_verzekering(row)
    }

    #[instrument(skip(self), fields(verzekering_id = %id))]
    async fn get_verzekering(
        &self,
        id: OpstalverzekeringId,
    ) -> Result<Opstalverzekering, PortError> {
        debug!("Fetching opstalverzekering by ID");

        let row = self
            .repository
            .get_by_id(*id.as_uuid())
            .await
            .map_err(|e| not_found_as(e, id))?;
        row_to_verzekering(row)
    }

    #[instrument(skip(self))]
    async fn find_verzekeringen(
        &self,
        query: VerzekeringQuery,
    ) -> Result<Vec<Opstalverzekering>, PortError> {
        debug!("Finding opstalverzekeringen");

        let filter = OpstalverzekeringFilter {
            polis_nummer: query.polis_nummer,
            klant_id: query.klant_id.map(|id| *id.as_uuid()),
            type_dekking: query.type_dekking,
            alleen_actief: query.alleen_actief,
        };

        self.repository
            .find(&filter)
            .await?
            .into_iter()
            .map(row_to_verzekering)
            .collect()
    }

    #[instrument(skip(self), fields(verzekering_id = %id, eind_datum = %eind_datum))]
    async fn close_verzekering(
        &self,
        id: OpstalverzekeringId,
        eind_datum: DateTime<Utc>,
    ) -> Result<Opstalverzekering, PortError> {
        debug!("Closing opstalverzekering");

        let row = self
            .repository
            .close(*id.as_uuid(), eind_datum)
            .await
            .map_err(|e| not_found_as(e, id))?;
        row_to_verzekering(row)
    }
}

fn not_found_as(error: DatabaseError, id: OpstalverzekeringId) -> PortError {
    if error.is_not_found() {
        PortError::not_found("Opstalverzekering", id)
    } else {
        error.into()
    }
}

fn verzekering_to_row(verzekering: &Opstalverzekering) -> OpstalverzekeringRow {
    OpstalverzekeringRow {
        id: *verzekering.id.as_uuid(),
        polis_nummer: verzekering.polis_nummer,
        klant_id: *verzekering.klant_id.as_uuid(),
        type_dekking: verzekering.type_dekking.clone(),
        gedekte_gebeurtenissen: verzekering.gedekte_gebeurtenissen.clone(),
        uitsluitingen: verzekering.uitsluitingen.clone(),
        herbouwwaarde: verzekering.herbouwwaarde.amount(),
        inboedelwaarde: verzekering.inboedelwaarde.amount(),
        premie: verzekering.premie.amount(),
        betaaltermijn: verzekering.betaaltermijn.clone(),
        aanvullende_opties: verzekering.aanvullende_opties.clone(),
        begin_datum: verzekering.looptijd.begin,
        eind_datum: verzekering.looptijd.end,
    }
}

fn row_to_verzekering(row: OpstalverzekeringRow) -> Result<Opstalverzekering, PortError> {
    Ok(Opstalverzekering {
        id: OpstalverzekeringId::from_uuid(row.id),
        polis_nummer: row.polis_nummer,
        klant_id: KlantId::from_uuid(row.klant_id),
        type_dekking: row.type_dekking,
        gedekte_gebeurtenissen: row.gedekte_gebeurtenissen,
        uitsluitingen: row.uitsluitingen,
        herbouwwaarde: stored_money(row.herbouwwaarde, "herbouwwaarde")?,
        inboedelwaarde: stored_money(row.inboedelwaarde, "inboedelwaarde")?,
        premie: stored_money(row.premie, "premie")?,
        betaaltermijn: row.betaaltermijn,
        aanvullende_opties: row.aanvullende_opties,
        looptijd: ActivePeriod::from_parts(row.begin_datum, row.eind_datum),
    })
}

fn stored_money(amount: Decimal, column: &str) -> Result<Money, PortError> {
    Money::new(amount).map_err(|e| {
        DatabaseError::InvalidData(format!("{}: {}", column, e)).into()
    })
}

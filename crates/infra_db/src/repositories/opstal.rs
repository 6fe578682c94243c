//! Building insurance policy repository implementation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::DatabaseError;

const OPSTAL_COLUMNS: &str = "id, polis_nummer, klant_id, type_dekking, \
     gedekte_gebeurtenissen, uitsluitingen, herbouwwaarde, inboedelwaarde, premie, \
     betaaltermijn, aanvullende_opties, begin_datum, eind_datum";

/// Database row for the `opstalverzekeringen` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct OpstalverzekeringRow {
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

/// Column filters for policy lookups
#[derive(Debug, Clone, Default)]
pub struct OpstalverzekeringFilter {
    pub polis_nummer: Option<i32>,
    pub klant_id: Option<Uuid>,
    pub type_dekking: Option<String>,
    /// Restricts to rows where `eind_datum IS NULL`
    pub alleen_actief: bool,
}

/// Repository for building insurance policy records
#[derive(Debug, Clone)]
pub struct OpstalverzekeringRepository {
    pool: PgPool,
}

impl OpstalverzekeringRepository {
    /// Creates a new OpstalverzekeringRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a policy row
    ///
    /// # Errors
    ///
    /// * `DatabaseError::DuplicateEntry` if the policy number is already used
    /// * `DatabaseError::ForeignKeyViolation` if the customer does not exist
    pub async fn insert(
        &self,
        row: &OpstalverzekeringRow,
    ) -> Result<OpstalverzekeringRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO opstalverzekeringen ({OPSTAL_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {OPSTAL_COLUMNS}"
        );

        let result = sqlx::query_as::<_, OpstalverzekeringRow>(&sql)
            .bind(row.id)
            .bind(row.polis_nummer)
            .bind(row.klant_id)
            .bind(&row.type_dekking)
            .bind(&row.gedekte_gebeurtenissen)
            .bind(&row.uitsluitingen)
            .bind(row.herbouwwaarde)
            .bind(row.inboedelwaarde)
            .bind(row.premie)
            .bind(&row.betaaltermijn)
            .bind(&row.aanvullende_opties)
            .bind(row.begin_datum)
            .bind(row.eind_datum)
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(stored) => Ok(stored),
            Err(e) => match DatabaseError::from(e) {
                DatabaseError::DuplicateEntry(_) => Err(DatabaseError::duplicate(
                    "Opstalverzekering",
                    "polis_nummer",
                    row.polis_nummer,
                )),
                other => Err(other),
            },
        }
    }

    /// Retrieves a policy by ID, regardless of its end date
    pub async fn get_by_id(&self, id: Uuid) -> Result<OpstalverzekeringRow, DatabaseError> {
        let sql = format!("SELECT {OPSTAL_COLUMNS} FROM opstalverzekeringen WHERE id = $1");

        sqlx::query_as::<_, OpstalverzekeringRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Opstalverzekering", id))
    }

    /// Finds policies matching every set filter
    ///
    /// Text comparison is exact and case-sensitive.
    pub async fn find(
        &self,
        filter: &OpstalverzekeringFilter,
    ) -> Result<Vec<OpstalverzekeringRow>, DatabaseError> {
        let rows = select_filtered(filter)
            .build_query_as::<OpstalverzekeringRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Sets the end date of a policy that has none yet
    ///
    /// # Errors
    ///
    /// * `DatabaseError::NotFound` if no policy has this ID
    /// * `DatabaseError::Conflict` if the policy already has an end date
    pub async fn close(
        &self,
        id: Uuid,
        eind_datum: DateTime<Utc>,
    ) -> Result<OpstalverzekeringRow, DatabaseError> {
        let sql = format!(
            "UPDATE opstalverzekeringen SET eind_datum = $2 \
             WHERE id = $1 AND eind_datum IS NULL \
             RETURNING {OPSTAL_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, OpstalverzekeringRow>(&sql)
            .bind(id)
            .bind(eind_datum)
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(row) => Ok(row),
            None => {
                let exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (SELECT 1 FROM opstalverzekeringen WHERE id = $1)",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

                if exists {
                    Err(DatabaseError::Conflict(format!(
                        "Opstalverzekering '{}' already has an end date",
                        id
                    )))
                } else {
                    Err(DatabaseError::not_found("Opstalverzekering", id))
                }
            }
        }
    }
}

fn select_filtered(filter: &OpstalverzekeringFilter) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {OPSTAL_COLUMNS} FROM opstalverzekeringen WHERE TRUE"
    ));

    if filter.alleen_actief {
        builder.push(" AND eind_datum IS NULL");
    }
    if let Some(polis_nummer) = filter.polis_nummer {
        builder.push(" AND polis_nummer = ").push_bind(polis_nummer);
    }
    if let Some(klant_id) = filter.klant_id {
        builder.push(" AND klant_id = ").push_bind(klant_id);
    }
    if let Some(ref type_dekking) = filter.type_dekking {
        builder.push(" AND type_dekking = ").push_bind(type_dekking);
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filter_comes_before_number() {
        let filter = OpstalverzekeringFilter {
            polis_nummer: Some(1001),
            alleen_actief: true,
            ..Default::default()
        };
        let builder = select_filtered(&filter);
        let sql = builder.sql();

        assert!(sql.ends_with("WHERE TRUE AND eind_datum IS NULL AND polis_nummer = $1"));
    }

    #[test]
    fn test_type_dekking_is_bound_not_inlined() {
        let filter = OpstalverzekeringFilter {
            type_dekking: Some("All-risk'; --".to_string()),
            ..Default::default()
        };
        let builder = select_filtered(&filter);
        let sql = builder.sql();

        assert!(sql.ends_with("AND type_dekking = $1"));
        assert!(!sql.contains("All-risk"));
    }

    #[test]
    fn test_empty_filter_selects_all_rows() {
        let filter = OpstalverzekeringFilter::default();
        let builder = select_filtered(&filter);
        assert!(builder.sql().ends_with("FROM opstalverzekeringen WHERE TRUE"));
    }
}

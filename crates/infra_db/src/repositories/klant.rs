//! Customer repository implementation

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

const KLANT_COLUMNS: &str = "id, voornaam, tussenvoegsel, achternaam, geboortedatum, \
     woonplaats, begin_datum, eind_datum";

/// Database row for the `klanten` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct KlantRow {
    pub id: Uuid,
    pub voornaam: String,
    pub tussenvoegsel: Option<String>,
    pub achternaam: String,
    pub geboortedatum: NaiveDate,
    pub woonplaats: String,
    pub begin_datum: DateTime<Utc>,
    pub eind_datum: Option<DateTime<Utc>>,
}

/// Repository for customer records
#[derive(Debug, Clone)]
pub struct KlantRepository {
    pool: PgPool,
}

impl KlantRepository {
    /// Creates a new KlantRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a customer row
    ///
    /// # Returns
    ///
    /// The row as stored
    pub async fn insert(&self, row: &KlantRow) -> Result<KlantRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO klanten ({KLANT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {KLANT_COLUMNS}"
        );

        let stored = sqlx::query_as::<_, KlantRow>(&sql)
            .bind(row.id)
            .bind(&row.voornaam)
            .bind(&row.tussenvoegsel)
            .bind(&row.achternaam)
            .bind(row.geboortedatum)
            .bind(&row.woonplaats)
            .bind(row.begin_datum)
            .bind(row.eind_datum)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    /// Retrieves a customer by ID
    ///
    /// # Returns
    ///
    /// The customer row or NotFound error
    pub async fn get_by_id(&self, id: Uuid) -> Result<KlantRow, DatabaseError> {
        let sql = format!("SELECT {KLANT_COLUMNS} FROM klanten WHERE id = $1");

        sqlx::query_as::<_, KlantRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Klant", id))
    }

    /// Sets the end date of a customer that has none yet
    ///
    /// # Errors
    ///
    /// * `DatabaseError::NotFound` if no customer has this ID
    /// * `DatabaseError::Conflict` if the customer already has an end date
    pub async fn close(
        &self,
        id: Uuid,
        eind_datum: DateTime<Utc>,
    ) -> Result<KlantRow, DatabaseError> {
        let sql = format!(
            "UPDATE klanten SET eind_datum = $2 \
             WHERE id = $1 AND eind_datum IS NULL \
             RETURNING {KLANT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, KlantRow>(&sql)
            .bind(id)
            .bind(eind_datum)
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(row) => Ok(row),
            None if self.exists(id).await? => Err(DatabaseError::Conflict(format!(
                "Klant '{}' already has an end date",
                id
            ))),
            None => Err(DatabaseError::not_found("Klant", id)),
        }
    }

    /// Checks whether a customer row exists
    pub async fn exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM klanten WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

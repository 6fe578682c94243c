//! Building Insurance Domain Ports
//!
//! `OpstalverzekeringPort` is implemented by the PostgreSQL adapter in
//! `infra_db` and by `MockOpstalverzekeringPort` for tests. Queries are
//! described with [`VerzekeringQuery`] so every adapter applies the same
//! filters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{KlantId, OpstalverzekeringId, PortError, DomainPort, HealthCheckable};

use crate::opstalverzekering::Opstalverzekering;

/// Query parameters for finding policies
///
/// All set filters must match. `alleen_actief` restricts the result to
/// policies without an end date; it is applied before any other filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerzekeringQuery {
    /// Exact policy number
    pub polis_nummer: Option<i32>,
    /// Owning customer
    pub klant_id: Option<KlantId>,
    /// Exact, case-sensitive coverage type
    pub type_dekking: Option<String>,
    /// Only policies without an end date
    pub alleen_actief: bool,
}

impl VerzekeringQuery {
    /// Active policy with the given number
    pub fn actief_by_polis_nummer(polis_nummer: i32) -> Self {
        Self {
            polis_nummer: Some(polis_nummer),
            alleen_actief: true,
            ..Default::default()
        }
    }

    /// Active policies of a customer
    pub fn actief_by_klant(klant_id: KlantId) -> Self {
        Self {
            klant_id: Some(klant_id),
            alleen_actief: true,
            ..Default::default()
        }
    }

    /// Active policies with exactly this coverage type
    pub fn actief_by_type_dekking(type_dekking: impl Into<String>) -> Self {
        Self {
            type_dekking: Some(type_dekking.into()),
            alleen_actief: true,
            ..Default::default()
        }
    }

    /// Returns true if the policy satisfies every filter of this query
    pub fn matches(&self, polis: &Opstalverzekering) -> bool {
        if self.alleen_actief && !polis.is_active() {
            return false;
        }
        if let Some(polis_nummer) = self.polis_nummer {
            if polis.polis_nummer != polis_nummer {
                return false;
            }
        }
        if let Some(klant_id) = self.klant_id {
            if polis.klant_id != klant_id {
                return false;
            }
        }
        if let Some(ref type_dekking) = self.type_dekking {
            if polis.type_dekking != *type_dekking {
                return false;
            }
        }
        true
    }
}

/// The port trait for building insurance record storage
#[async_trait]
pub trait OpstalverzekeringPort: DomainPort + HealthCheckable {
    /// Persists a newly written policy
    ///
    /// # Returns
    ///
    /// The stored policy, or `PortError::Conflict` if the policy number is
    /// already used by any stored policy (active or ended)
    async fn insert_verzekering(
        &self,
        verzekering: &Opstalverzekering,
    ) -> Result<Opstalverzekering, PortError>;

    /// Retrieves a policy by ID, active or not
    async fn get_verzekering(
        &self,
        id: OpstalverzekeringId,
    ) -> Result<Opstalverzekering, PortError>;

    /// Finds policies matching the query, in no particular order
    async fn find_verzekeringen(
        &self,
        query: VerzekeringQuery,
    ) -> Result<Vec<Opstalverzekering>, PortError>;

    /// Sets the policy end date, only if none is set yet
    ///
    /// # Returns
    ///
    /// The updated policy, `PortError::NotFound`, or `PortError::Conflict`
    /// if it already has an end date
    async fn close_verzekering(
        &self,
        id: OpstalverzekeringId,
        eind_datum: DateTime<Utc>,
    ) -> Result<Opstalverzekering, PortError>;
}

/// Mock implementation of OpstalverzekeringPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use core_kernel::HealthCheckResult;

    /// In-memory mock implementation of OpstalverzekeringPort
    ///
    /// `insert_verzekering` enforces policy number uniqueness like the
    /// database does. `with_verzekeringen` seeds rows without that check, so
    /// tests can reproduce legacy data with a reused number.
    #[derive(Debug, Default, Clone)]
    pub struct MockOpstalverzekeringPort {
        verzekeringen: Arc<RwLock<HashMap<OpstalverzekeringId, Opstalverzekering>>>,
    }

    impl MockOpstalverzekeringPort {
        /// Creates a new empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with policies for testing
        pub async fn with_verzekeringen(verzekeringen: Vec<Opstalverzekering>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.verzekeringen.write().await;
                for verzekering in verzekeringen {
                    stored.insert(verzekering.id, verzekering);
                }
            }
            port
        }

        /// Returns the number of stored policies, active or not
        pub async fn len(&self) -> usize {
            self.verzekeringen.read().await.len()
        }
    }

    impl DomainPort for MockOpstalverzekeringPort {}

    #[async_trait]
    impl HealthCheckable for MockOpstalverzekeringPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::always_healthy("mock-opstalverzekering-port")
        }
    }

    #[async_trait]
    impl OpstalverzekeringPort for MockOpstalverzekeringPort {
        async fn insert_verzekering(
            &self,
            verzekering: &Opstalverzekering,
        ) -> Result<Opstalverzekering, PortError> {
            let mut stored = self.verzekeringen.write().await;
            if stored.values().any(|v| v.polis_nummer == verzekering.polis_nummer) {
                return Err(PortError::conflict(format!(
                    "Polisnummer {} bestaat al",
                    verzekering.polis_nummer
                )));
            }
            stored.insert(verzekering.id, verzekering.clone());
            Ok(verzekering.clone())
        }

        async fn get_verzekering(
            &self,
            id: OpstalverzekeringId,
        ) -> Result<Opstalverzekering, PortError> {
            self.verzekeringen
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Opstalverzekering", id))
        }

        async fn find_verzekeringen(
            &self,
            query: VerzekeringQuery,
        ) -> Result<Vec<Opstalverzekering>, PortError> {
            Ok(self
                .verzekeringen
                .read()
                .await
                .values()
                .filter(|v| query.matches(v))
                .cloned()
                .collect())
        }

        async fn close_verzekering(
            &self,
            id: OpstalverzekeringId,
            eind_datum: DateTime<Utc>,
        ) -> Result<Opstalverzekering, PortError> {
            let mut stored = self.verzekeringen.write().await;
            let verzekering = stored
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Opstalverzekering", id))?;

            if verzekering.looptijd.end.is_some() {
                return Err(PortError::conflict(format!(
                    "Opstalverzekering {} heeft al een einddatum",
                    id
                )));
            }
            verzekering.looptijd.end = Some(eind_datum);
            Ok(verzekering.clone())
        }
    }
}

//! Customer Domain Ports
//!
//! The `KlantPort` trait defines what the customer domain needs from its
//! record store. Implementations:
//!
//! - **PostgreSQL adapter** (`infra_db::adapters::PostgresKlantAdapter`)
//! - **Mock adapter** (`MockKlantPort`, behind the `mock` feature) for tests
//!
//! ```rust,ignore
//! use domain_klant::ports::KlantPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn KlantPort> = Arc::new(PostgresKlantAdapter::new(pool));
//! let klant = port.get_klant(klant_id).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{KlantId, PortError, DomainPort, HealthCheckable};

use crate::klant::Klant;

/// The port trait for customer record storage
///
/// All methods return `Result<T, PortError>` so services handle database
/// and in-memory stores the same way.
#[async_trait]
pub trait KlantPort: DomainPort + HealthCheckable {
    /// Persists a newly created customer
    ///
    /// # Returns
    ///
    /// The customer as stored
    async fn insert_klant(&self, klant: &Klant) -> Result<Klant, PortError>;

    /// Retrieves a customer by ID, active or not
    ///
    /// # Returns
    ///
    /// The customer if found, or `PortError::NotFound`
    async fn get_klant(&self, id: KlantId) -> Result<Klant, PortError>;

    /// Sets the relationship end date, only if none is set yet
    ///
    /// The write is conditional on the stored end date still being empty,
    /// so two concurrent closes cannot both succeed.
    ///
    /// # Returns
    ///
    /// The updated customer, `PortError::NotFound` if the customer does not
    /// exist, or `PortError::Conflict` if it already has an end date
    async fn close_klant(
        &self,
        id: KlantId,
        eind_datum: DateTime<Utc>,
    ) -> Result<Klant, PortError>;
}

/// Extension trait for KlantPort with convenience methods
#[async_trait]
pub trait KlantPortExt: KlantPort {
    /// Gets a customer, mapping NotFound to None
    async fn find_klant(&self, id: KlantId) -> Result<Option<Klant>, PortError> {
        match self.get_klant(id).await {
            Ok(klant) => Ok(Some(klant)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<T: KlantPort + ?Sized> KlantPortExt for T {}

/// Mock implementation of KlantPort for testing
///
/// Stores customers in memory; no database required.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use core_kernel::HealthCheckResult;

    /// In-memory mock implementation of KlantPort
    #[derive(Debug, Default, Clone)]
    pub struct MockKlantPort {
        klanten: Arc<RwLock<HashMap<KlantId, Klant>>>,
    }

    impl MockKlantPort {
        /// Creates a new empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with customers for testing
        pub async fn with_klanten(klanten: Vec<Klant>) -> Self {
            let port = Self::new();
            for klant in klanten {
                port.klanten.write().await.insert(klant.id, klant);
            }
            port
        }

        /// Returns the number of stored customers
        pub async fn len(&self) -> usize {
            self.klanten.read().await.len()
        }
    }

    impl DomainPort for MockKlantPort {}

    #[async_trait]
    impl HealthCheckable for MockKlantPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::always_healthy("mock-klant-port")
        }
    }

    #[async_trait]
    impl KlantPort for MockKlantPort {
        async fn insert_klant(&self, klant: &Klant) -> Result<Klant, PortError> {
            let mut klanten = self.klanten.write().await;
            if klanten.contains_key(&klant.id) {
                return Err(PortError::conflict(format!("Klant {} bestaat al", klant.id)));
            }
            klanten.insert(klant.id, klant.clone());
            Ok(klant.clone())
        }

        async fn get_klant(&self, id: KlantId) -> Result<Klant, PortError> {
            self.klanten
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Klant", id))
        }

        async fn close_klant(
            &self,
            id: KlantId,
            eind_datum: DateTime<Utc>,
        ) -> Result<Klant, PortError> {
            let mut klanten = self.klanten.write().await;
            let klant = klanten
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Klant", id))?;

            if klant.relatie.end.is_some() {
                return Err(PortError::conflict(format!("Klant {} heeft al een einddatum", id)));
            }
            klant.relatie.end = Some(eind_datum);
            Ok(klant.clone())
        }
    }
}

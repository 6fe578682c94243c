//! Customer application service
//!
//! Orchestrates customer operations: validates input, applies the lifecycle
//! rule and delegates persistence to the injected [`KlantPort`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use validator::Validate;

use core_kernel::{validation_messages, KlantId, PortError, SharedClock};

use crate::error::KlantError;
use crate::klant::{Klant, NieuweKlant};
use crate::ports::KlantPort;

/// Service for creating, fetching and ending customer relationships
#[derive(Clone)]
pub struct KlantService {
    port: Arc<dyn KlantPort>,
    clock: SharedClock,
}

impl KlantService {
    /// Creates a new customer service
    ///
    /// # Arguments
    ///
    /// * `port` - Customer record store
    /// * `clock` - Source of "now" for start and end dates
    pub fn new(port: Arc<dyn KlantPort>, clock: SharedClock) -> Self {
        Self { port, clock }
    }

    /// Creates a new customer
    ///
    /// The relationship starts at the current time and has no end date.
    ///
    /// # Errors
    ///
    /// * `KlantError::Validation` if required fields are empty or too long;
    ///   nothing is written in that case
    /// * `KlantError::Store` if persisting fails
    pub async fn create(&self, nieuw: NieuweKlant) -> Result<Klant, KlantError> {
        if let Err(errors) = nieuw.validate() {
            return Err(KlantError::Validation(validation_messages(&errors)));
        }

        let klant = Klant::new(nieuw, self.clock.utc());
        let stored = self.port.insert_klant(&klant).await?;

        info!(klant_id = %stored.id, "Klant aangemaakt");
        Ok(stored)
    }

    /// Gets a customer by ID, regardless of whether the relationship ended
    pub async fn get_by_id(&self, id: KlantId) -> Result<Klant, KlantError> {
        self.port.get_klant(id).await.map_err(|e| not_found_or_store(e, id))
    }

    /// Ends the customer relationship
    ///
    /// # Arguments
    ///
    /// * `id` - The customer to end
    /// * `eind_datum` - Explicit end date; the current time when None
    ///
    /// # Errors
    ///
    /// * `KlantError::NotFound` if the customer does not exist
    /// * `KlantError::EindDatumAlGezet` if an end date is already present,
    ///   including when a concurrent request set it first
    pub async fn set_einddatum(
        &self,
        id: KlantId,
        eind_datum: Option<DateTime<Utc>>,
    ) -> Result<Klant, KlantError> {
        let mut klant = self.get_by_id(id).await?;

        let end = match klant.beeindig(eind_datum, self.clock.utc()) {
            Ok(end) => end,
            Err(e) => {
                warn!(klant_id = %id, "Klant heeft al een einddatum");
                return Err(e);
            }
        };

        let updated = self.port.close_klant(id, end).await.map_err(|e| {
            if e.is_conflict() {
                warn!(klant_id = %id, "Klant gelijktijdig beëindigd");
                KlantError::EindDatumAlGezet
            } else {
                not_found_or_store(e, id)
            }
        })?;

        info!(klant_id = %id, eind_datum = %end, "Klantrelatie beëindigd");
        Ok(updated)
    }
}

fn not_found_or_store(error: PortError, id: KlantId) -> KlantError {
    if error.is_not_found() {
        KlantError::NotFound(id)
    } else {
        KlantError::Store(error)
    }
}

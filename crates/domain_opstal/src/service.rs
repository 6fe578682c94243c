//! Building insurance application service
//!
//! Writing a policy needs the customer record as well, so the service holds
//! both ports. Every read filters to active policies in the query itself.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use validator::Validate;

use core_kernel::{validation_messages, KlantId, OpstalverzekeringId, PortError, SharedClock};
use domain_klant::KlantPort;

use crate::error::OpstalError;
use crate::opstalverzekering::{NieuweOpstalverzekering, Opstalverzekering};
use crate::ports::{OpstalverzekeringPort, VerzekeringQuery};

/// Service for writing, querying and ending building insurance policies
#[derive(Clone)]
pub struct OpstalverzekeringService {
    verzekeringen: Arc<dyn OpstalverzekeringPort>,
    klanten: Arc<dyn KlantPort>,
    clock: SharedClock,
}

impl OpstalverzekeringService {
    /// Creates a new policy service
    ///
    /// # Arguments
    ///
    /// * `verzekeringen` - Policy record store
    /// * `klanten` - Customer record store, read to check the relationship
    /// * `clock` - Source of "now" for start and end dates
    pub fn new(
        verzekeringen: Arc<dyn OpstalverzekeringPort>,
        klanten: Arc<dyn KlantPort>,
        clock: SharedClock,
    ) -> Self {
        Self {
            verzekeringen,
            klanten,
            clock,
        }
    }

    /// Writes a new policy for an active customer
    ///
    /// # Errors
    ///
    /// * `OpstalError::Validation` for missing or over-length fields
    /// * `OpstalError::KlantNotFound` if the customer does not exist
    /// * `OpstalError::KlantBeeindigd` if the customer relationship ended
    /// * `OpstalError::DuplicatePolisNummer` if the number is already stored
    pub async fn create(
        &self,
        nieuw: NieuweOpstalverzekering,
    ) -> Result<Opstalverzekering, OpstalError> {
        if let Err(errors) = nieuw.validate() {
            return Err(OpstalError::Validation(validation_messages(&errors)));
        }

        let klant_id = nieuw.klant_id;
        let klant = self.klanten.get_klant(klant_id).await.map_err(|e| {
            if e.is_not_found() {
                OpstalError::KlantNotFound(klant_id)
            } else {
                OpstalError::Store(e)
            }
        })?;

        if !klant.is_active() {
            warn!(klant_id = %klant_id, "Polis geweigerd, klantrelatie beëindigd");
            return Err(OpstalError::KlantBeeindigd(klant_id));
        }

        let polis_nummer = nieuw.polis_nummer;
        let verzekering = Opstalverzekering::new(nieuw, self.clock.utc());
        let stored = self
            .verzekeringen
            .insert_verzekering(&verzekering)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    OpstalError::DuplicatePolisNummer(polis_nummer)
                } else {
                    OpstalError::Store(e)
                }
            })?;

        info!(
            verzekering_id = %stored.id,
            polis_nummer = stored.polis_nummer,
            klant_id = %klant_id,
            "Opstalverzekering afgesloten"
        );
        Ok(stored)
    }

    /// Gets the active policy with the given number
    ///
    /// Ended policies with the same number are never returned.
    pub async fn get_by_polis_nummer(
        &self,
        polis_nummer: i32,
    ) -> Result<Opstalverzekering, OpstalError> {
        self.verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_polis_nummer(polis_nummer))
            .await?
            .into_iter()
            .next()
            .ok_or(OpstalError::PolisNummerNotFound(polis_nummer))
    }

    /// Lists the active policies of a customer
    ///
    /// An unknown customer yields an empty list.
    pub async fn get_by_klant(
        &self,
        klant_id: KlantId,
    ) -> Result<Vec<Opstalverzekering>, OpstalError> {
        let verzekeringen = self
            .verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_klant(klant_id))
            .await?;
        debug!(klant_id = %klant_id, count = verzekeringen.len(), "Polissen van klant");
        Ok(verzekeringen)
    }

    /// Lists active policies whose coverage type equals `type_dekking` exactly
    pub async fn get_by_type_dekking(
        &self,
        type_dekking: &str,
    ) -> Result<Vec<Opstalverzekering>, OpstalError> {
        Ok(self
            .verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_type_dekking(type_dekking))
            .await?)
    }

    /// Ends a policy
    ///
    /// # Arguments
    ///
    /// * `id` - The policy to end
    /// * `eind_datum` - Explicit end date; the current time when None
    ///
    /// # Errors
    ///
    /// * `OpstalError::NotFound` if the policy does not exist
    /// * `OpstalError::EindDatumAlGezet` if the policy already ended
    pub async fn set_einddatum(
        &self,
        id: OpstalverzekeringId,
        eind_datum: Option<DateTime<Utc>>,
    ) -> Result<Opstalverzekering, OpstalError> {
        let mut verzekering = self
            .verzekeringen
            .get_verzekering(id)
            .await
            .map_err(|e| not_found_or_store(e, id))?;

        let end = verzekering.beeindig(eind_datum, self.clock.utc()).map_err(|e| {
            warn!(verzekering_id = %id, "Opstalverzekering heeft al een einddatum");
            e
        })?;

        let updated = self
            .verzekeringen
            .close_verzekering(id, end)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    warn!(verzekering_id = %id, "Opstalverzekering gelijktijdig beëindigd");
                    OpstalError::EindDatumAlGezet
                } else {
                    not_found_or_store(e, id)
                }
            })?;

        info!(verzekering_id = %id, eind_datum = %end, "Opstalverzekering beëindigd");
        Ok(updated)
    }
}

fn not_found_or_store(error: PortError, id: OpstalverzekeringId) -> OpstalError {
    if error.is_not_found() {
        OpstalError::NotFound(id)
    } else {
        OpstalError::Store(error)
    }
}

//! Building insurance domain errors

use thiserror::Error;

use core_kernel::{KlantId, OpstalverzekeringId, PortError};

/// Errors that can occur in the building insurance domain
#[derive(Debug, Error)]
pub enum OpstalError {
    /// No policy exists with the given ID
    #[error("Opstalverzekering niet gevonden: {0}")]
    NotFound(OpstalverzekeringId),

    /// No active policy carries the given policy number
    #[error("Geen actieve opstalverzekering met polisnummer {0}")]
    PolisNummerNotFound(i32),

    /// The referenced customer does not exist
    #[error("Klant niet gevonden: {0}")]
    KlantNotFound(KlantId),

    /// The referenced customer's relationship has ended
    #[error("Klantrelatie is beëindigd; er kan geen opstalverzekering worden afgesloten.")]
    KlantBeeindigd(KlantId),

    /// The policy has already been ended
    #[error("Opstalverzekering heeft al een einddatum.")]
    EindDatumAlGezet,

    /// Another stored policy already uses this policy number
    #[error("Polisnummer {0} is al in gebruik.")]
    DuplicatePolisNummer(i32),

    /// The input failed validation
    #[error("Ongeldige polisgegevens: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A record store failed
    #[error("Polisopslag: {0}")]
    Store(#[from] PortError),
}

impl OpstalError {
    /// Returns true if this error is a business-rule conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, OpstalError::KlantBeeindigd(_) | OpstalError::EindDatumAlGezet)
    }

    /// Returns true if the referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OpstalError::NotFound(_) | OpstalError::PolisNummerNotFound(_) | OpstalError::KlantNotFound(_)
        )
    }
}

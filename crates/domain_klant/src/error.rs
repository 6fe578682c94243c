//! Customer domain errors

use thiserror::Error;

use core_kernel::{KlantId, PortError};

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum KlantError {
    /// No customer exists with the given ID
    #[error("Klant niet gevonden: {0}")]
    NotFound(KlantId),

    /// The customer relationship has already been ended
    #[error("Klant heeft al een einddatum.")]
    EindDatumAlGezet,

    /// The input failed validation
    #[error("Ongeldige klantgegevens: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The record store failed
    #[error("Klantopslag: {0}")]
    Store(#[from] PortError),
}

impl KlantError {
    /// Returns true if this error is a business-rule conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, KlantError::EindDatumAlGezet)
    }
}

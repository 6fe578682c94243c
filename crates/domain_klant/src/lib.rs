//! Customer Domain
//!
//! This crate manages customer records ("klanten") and the customer
//! relationship lifecycle.
//!
//! A customer relationship starts when the record is created and ends when an
//! end date is set. Ending is a one-way transition: a customer with an end
//! date can never be ended again, and no new building insurance may be
//! written for them.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_klant::{KlantService, NieuweKlant};
//!
//! let service = KlantService::new(port, clock);
//! let klant = service.create(nieuwe_klant).await?;
//! let beeindigd = service.set_einddatum(klant.id, None).await?;
//! assert!(!beeindigd.is_active());
//! ```

pub mod klant;
pub mod error;
pub mod ports;
pub mod service;

pub use klant::{Klant, NieuweKlant};
pub use error::KlantError;
pub use ports::{KlantPort, KlantPortExt};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockKlantPort;
pub use service::KlantService;

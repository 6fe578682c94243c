//! In-memory wiring of the domain services
//!
//! Services built from one [`InMemoryStores`] share the same mock ports and
//! the same clock, like a single running application.

use std::sync::Arc;

use core_kernel::SharedClock;
use domain_klant::{KlantService, MockKlantPort};
use domain_opstal::{MockOpstalverzekeringPort, OpstalverzekeringService};

use crate::clock::FixedClock;

/// Mock record stores plus the clock the services see
#[derive(Clone)]
pub struct InMemoryStores {
    pub klanten: Arc<MockKlantPort>,
    pub verzekeringen: Arc<MockOpstalverzekeringPort>,
    pub clock: SharedClock,
}

impl Default for InMemoryStores {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStores {
    /// Empty stores and a clock frozen at `TemporalFixtures::now`
    pub fn new() -> Self {
        Self::with_clock(FixedClock::standard().shared())
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            klanten: Arc::new(MockKlantPort::new()),
            verzekeringen: Arc::new(MockOpstalverzekeringPort::new()),
            clock,
        }
    }

    /// Replaces the stores with pre-seeded ones
    pub fn seeded(
        klanten: MockKlantPort,
        verzekeringen: MockOpstalverzekeringPort,
    ) -> Self {
        Self {
            klanten: Arc::new(klanten),
            verzekeringen: Arc::new(verzekeringen),
            clock: FixedClock::standard().shared(),
        }
    }

    pub fn klant_service(&self) -> KlantService {
        KlantService::new(self.klanten.clone(), self.clock.clone())
    }

    pub fn opstal_service(&self) -> OpstalverzekeringService {
        OpstalverzekeringService::new(
            self.verzekeringen.clone(),
            self.klanten.clone(),
            self.clock.clone(),
        )
    }
}

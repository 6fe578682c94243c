//! Injectable time source
//!
//! Services never read the wall clock directly; they ask a
//! [`mockable::Clock`] so tests can pin "now" to a fixed instant.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

/// Clock handle shared between services and request handlers
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Returns the wall-clock implementation used in production
pub fn system_clock() -> SharedClock {
    Arc::new(DefaultClock)
}

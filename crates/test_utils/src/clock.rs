//! Deterministic clocks
//!
//! Both clocks implement `mockable::Clock`, so they can be passed wherever a
//! `SharedClock` is expected.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;

use core_kernel::SharedClock;

use crate::fixtures::TemporalFixtures;

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Frozen at [`TemporalFixtures::now`]
    pub fn standard() -> Self {
        Self(TemporalFixtures::now())
    }

    /// Wraps the clock for injection into services
    pub fn shared(self) -> SharedClock {
        Arc::new(self)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that only moves when told to
///
/// Clones share the same instant.
#[derive(Debug, Clone)]
pub struct MutableClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MutableClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Jumps to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }

    /// Wraps a clone of the clock for injection into services
    pub fn shared(&self) -> SharedClock {
        Arc::new(self.clone())
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

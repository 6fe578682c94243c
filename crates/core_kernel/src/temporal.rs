//! Lifecycle periods shared by every record
//!
//! Customers and policies both carry a start date that is set once at
//! creation and an optional end date. A record without an end date is
//! *Active*; once the end date is set the record is *Closed* and stays that
//! way. [`ActivePeriod`] owns that rule so both domains apply it identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to lifecycle transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Period already closed at {ended_at}")]
    AlreadyClosed {
        ended_at: DateTime<Utc>,
    },
}

/// The two states a record can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// No end date; the record is in effect
    Active,
    /// End date set; terminal
    Closed,
}

/// Start and optional end of a customer relationship or policy
///
/// Serialized flat into the owning record as `beginDatum` / `eindDatum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePeriod {
    /// When the record came into effect
    #[serde(rename = "beginDatum")]
    pub begin: DateTime<Utc>,
    /// When the record was ended, None while active
    #[serde(rename = "eindDatum")]
    pub end: Option<DateTime<Utc>>,
}

impl ActivePeriod {
    /// Creates an open period starting at the given time
    pub fn starting_at(begin: DateTime<Utc>) -> Self {
        Self { begin, end: None }
    }

    /// Rebuilds a period from stored values
    pub fn from_parts(begin: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self { begin, end }
    }

    /// Returns true while no end date has been set
    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }

    pub fn state(&self) -> LifecycleState {
        if self.is_active() {
            LifecycleState::Active
        } else {
            LifecycleState::Closed
        }
    }

    /// Closes the period
    ///
    /// The end date is `requested` when given, otherwise `now`. No ordering
    /// against the start date is enforced; back-dated ends are accepted.
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::AlreadyClosed` if an end date is already
    /// present, whatever the requested value.
    pub fn close(
        &mut self,
        requested: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, TemporalError> {
        if let Some(ended_at) = self.end {
            return Err(TemporalError::AlreadyClosed { ended_at });
        }
        let end = resolve_end(requested, now);
        self.end = Some(end);
        Ok(end)
    }
}

/// Picks the effective end date: the requested one, or the current time
pub fn resolve_end(requested: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    requested.unwrap_or(now)
}

//! Core Kernel - Foundational types for the Verzekering API
//!
//! This crate provides the building blocks shared by the customer and
//! building-insurance domains:
//! - Strongly-typed identifiers
//! - Monetary amounts with two decimal places
//! - The Active/Closed lifecycle period shared by all records
//! - Port error and health-check abstractions for store adapters
//! - An injectable clock

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod clock;
pub mod validation;

pub use money::{Money, MoneyError};
pub use temporal::{ActivePeriod, LifecycleState, TemporalError};
pub use identifiers::{KlantId, OpstalverzekeringId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use clock::{SharedClock, system_clock};
pub use validation::{not_blank, validation_messages};

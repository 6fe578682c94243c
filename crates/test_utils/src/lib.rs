//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! Verzekering API test suite.
//!
//! # Modules
//!
//! - `clock`: Deterministic clocks for start and end dates
//! - `fixtures`: Pre-built test data for customers and policies
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL test containers with the schema applied
//! - `assertions`: Lifecycle assertion helpers
//! - `generators`: Property-based test data generators
//! - `harness`: In-memory services wired to a fixed clock

pub mod clock;
pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;
pub mod harness;

pub use clock::*;
pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
pub use harness::*;

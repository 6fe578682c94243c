//! Repository implementations for domain entities
//!
//! Repositories own the SQL and the row types. They work with plain UUIDs and
//! decimals; converting rows into domain entities is the adapters' job.
//!
//! Queries are built at runtime with `sqlx::query_as` and `QueryBuilder`, so
//! the crate compiles without a live database.

pub mod klant;
pub mod opstal;

pub use klant::{KlantRepository, KlantRow};
pub use opstal::{OpstalverzekeringRepository, OpstalverzekeringRow, OpstalverzekeringFilter};

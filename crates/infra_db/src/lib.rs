//! Infrastructure Database Layer
//!
//! PostgreSQL storage for customers and building insurance policies, using
//! SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories own the SQL and the
//! row types; adapters implement the domain ports on top of them and
//! translate rows into domain entities.
//!
//! Both tables carry a nullable end date. Closing a record is a conditional
//! `UPDATE ... WHERE eind_datum IS NULL`, so concurrent closes cannot both
//! succeed.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig};
//! use infra_db::adapters::PostgresKlantAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/verzekeringen")).await?;
//! run_migrations(&pool).await?;
//! let klanten = PostgresKlantAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::{PostgresKlantAdapter, PostgresOpstalverzekeringAdapter};

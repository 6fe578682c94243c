//! Building Insurance Domain
//!
//! This crate manages building insurance policies ("opstalverzekeringen").
//! Every policy references exactly one customer by id; the customer is not
//! owned by the policy.
//!
//! # Rules
//!
//! - A policy can only be written for a customer whose relationship has not
//!   ended.
//! - Policy numbers are unique across all stored policies.
//! - Lookups by policy number, customer and coverage type only ever return
//!   policies without an end date.
//! - Coverage types match exactly, including case.
//! - An end date, once set, is final.

pub mod opstalverzekering;
pub mod error;
pub mod ports;
pub mod service;

pub use opstalverzekering::{Opstalverzekering, NieuweOpstalverzekering};
pub use error::OpstalError;
pub use ports::{OpstalverzekeringPort, VerzekeringQuery};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockOpstalverzekeringPort;
pub use service::OpstalverzekeringService;

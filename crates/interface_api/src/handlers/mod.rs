//! Request handlers

pub mod health;
pub mod klanten;
pub mod opstalverzekeringen;

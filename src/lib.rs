//! Shopping List - catalog reconciliation service
//!
//! Records checked-out shopping lists against a per-user catalog of
//! registered products: purchases of known products refresh the catalog,
//! unknown ones are registered, and named lists are archived.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

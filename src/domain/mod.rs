//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, outcomes)
//! - `shopping` - Items, shopping lists, name normalization and list validation

pub mod foundation;
pub mod shopping;

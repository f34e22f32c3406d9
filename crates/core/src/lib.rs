//! Domain types, errors, and validation for the Tramper walks catalog.
//!
//! This crate holds everything the persistence and HTTP layers share:
//! identifier/timestamp aliases, the domain error enum, and per-resource
//! validation functions.

pub mod error;
pub mod regions;
pub mod types;
pub mod walks;

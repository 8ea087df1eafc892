//! Domain types shared across Jobsify services.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod user;

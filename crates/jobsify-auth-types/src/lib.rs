//! Session-token types shared between issuing and checking.
//!
//! Provides JWT claims and validation plus the `BearerToken` extractor.

pub mod bearer;
pub mod token;

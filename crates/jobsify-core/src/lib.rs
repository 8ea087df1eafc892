//! Cross-cutting service plumbing: health handlers, tracing init,
//! request-id middleware, serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;

//! sea-orm entities owned by the auth service.

pub mod pending_otps;
pub mod users;

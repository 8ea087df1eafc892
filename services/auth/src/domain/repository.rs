#![allow(async_fn_in_trait)]

use jobsify_domain::user::UserRole;

use crate::domain::types::{NewUser, PendingOtp, User};
use crate::error::AuthServiceError;

/// Credential store. Side effects are durable and immediate.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new user record. The store's unique constraint on email is
    /// the source of truth for dedup; a violation surfaces as
    /// `DuplicateEmail` even when the caller's pre-check passed.
    async fn create(&self, user: &NewUser) -> Result<User, AuthServiceError>;

    async fn list_all(&self) -> Result<Vec<User>, AuthServiceError>;

    /// Mark the user's email as verified.
    async fn set_verified(&self, id: i32) -> Result<(), AuthServiceError>;

    async fn set_role(&self, id: i32, role: UserRole) -> Result<(), AuthServiceError>;

    async fn set_blocked(&self, id: i32) -> Result<(), AuthServiceError>;
}

/// Store for outstanding one-time codes, keyed by email.
pub trait OtpRepository: Send + Sync {
    /// Insert or overwrite the code for this email (last write wins).
    async fn upsert(&self, otp: &PendingOtp) -> Result<(), AuthServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<PendingOtp>, AuthServiceError>;

    /// Remove the code for this email (single-use consumption).
    async fn delete(&self, email: &str) -> Result<(), AuthServiceError>;
}

/// Outbound mail collaborator. Delivery failure is the caller's to log and
/// suppress — it must never fail the issuing flow.
pub trait MailTransport: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

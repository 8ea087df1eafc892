use chrono::{DateTime, Utc};

use jobsify_domain::user::UserRole;

/// User credential record as seen by the auth flow.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Opaque argon2 PHC string. Set at registration, only ever replaced
    /// wholesale.
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub email_verified: bool,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a user; id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Outstanding one-time email-verification code, keyed by email.
#[derive(Debug, Clone)]
pub struct PendingOtp {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PendingOtp {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// OTP time-to-live in seconds.
pub const OTP_TTL_SECS: i64 = 600;

/// OTP length in digits.
pub const OTP_LEN: usize = 6;

/// Session-token horizon in seconds (24 hours).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 86_400;

/// Minimum-strength policy: at least 8 characters with an upper-case letter,
/// a lower-case letter and a digit. Enforced before hashing, never by the
/// hasher itself.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use jobsify_auth::domain::repository::{MailTransport, OtpRepository, UserRepository};
use jobsify_auth::domain::types::{NewUser, OTP_TTL_SECS, PendingOtp, User};
use jobsify_auth::error::AuthServiceError;
use jobsify_auth::usecase::hasher::hash_password;
use jobsify_auth_types::token::JwtClaims;
use jobsify_domain::user::UserRole;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    next_id: Arc<AtomicI32>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            users: Arc::new(Mutex::new(users)),
            next_id: Arc::new(AtomicI32::new(next_id)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        // Mirrors the store's unique constraint on email.
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthServiceError::DuplicateEmail);
        }
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            email_verified: false,
            blocked: false,
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<User>, AuthServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn set_verified(&self, id: i32) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.email_verified = true;
        }
        Ok(())
    }

    async fn set_role(&self, id: i32, role: UserRole) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.role = role;
        }
        Ok(())
    }

    async fn set_blocked(&self, id: i32) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.blocked = true;
        }
        Ok(())
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockOtpRepo {
    pub otps: Arc<Mutex<Vec<PendingOtp>>>,
}

impl MockOtpRepo {
    pub fn new(otps: Vec<PendingOtp>) -> Self {
        Self {
            otps: Arc::new(Mutex::new(otps)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the code list for post-execution inspection.
    pub fn otps_handle(&self) -> Arc<Mutex<Vec<PendingOtp>>> {
        Arc::clone(&self.otps)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn upsert(&self, otp: &PendingOtp) -> Result<(), AuthServiceError> {
        let mut otps = self.otps.lock().unwrap();
        otps.retain(|o| o.email != otp.email);
        otps.push(otp.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<PendingOtp>, AuthServiceError> {
        Ok(self
            .otps
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.email == email)
            .cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), AuthServiceError> {
        self.otps.lock().unwrap().retain(|o| o.email != email);
        Ok(())
    }
}

// ── Mail transports ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl MailTransport for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

/// Mail transport that always fails delivery.
#[derive(Clone)]
pub struct FailingMailer;

impl MailTransport for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> anyhow::Result<()> {
        anyhow::bail!("mail relay unreachable")
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(id: i32, email: &str) -> User {
    User {
        id,
        email: email.to_owned(),
        password_hash: String::new(),
        name: Some("Test User".to_owned()),
        phone: None,
        role: UserRole::Seeker,
        email_verified: true,
        blocked: false,
        created_at: Utc::now(),
    }
}

pub fn test_user_with_password(id: i32, email: &str, password: &str) -> User {
    let mut user = test_user(id, email);
    user.password_hash = hash_password(password).unwrap();
    user
}

pub fn test_otp(email: &str, code: &str) -> PendingOtp {
    PendingOtp {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() + Duration::seconds(OTP_TTL_SECS),
        created_at: Utc::now(),
    }
}

pub fn expired_otp(email: &str, code: &str) -> PendingOtp {
    PendingOtp {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() - Duration::seconds(1),
        created_at: Utc::now() - Duration::seconds(OTP_TTL_SECS + 1),
    }
}

/// Sign a token with an explicit expiry timestamp.
pub fn token_expiring_at(email: &str, role: UserRole, secret: &str, exp: u64) -> String {
    let claims = JwtClaims {
        sub: email.to_owned(),
        role: role.as_str().to_owned(),
        iat: exp.saturating_sub(86_400),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Sign a token whose expiry is already in the past.
pub fn expired_token(email: &str, role: UserRole, secret: &str) -> String {
    let exp = Utc::now().timestamp() as u64 - 3_600;
    token_expiring_at(email, role, secret, exp)
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

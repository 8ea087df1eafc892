use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};

use jobsify_auth_types::token::{JwtClaims, TokenError, validate_access_token};
use jobsify_domain::user::UserRole;

use crate::domain::repository::{MailTransport, OtpRepository, UserRepository};
use crate::domain::types::ACCESS_TOKEN_TTL_SECS;
use crate::error::AuthServiceError;
use crate::usecase::hasher::verify_password;
use crate::usecase::otp::issue_otp;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token for the given subject. The signature covers every
/// claim, so mutating subject or expiry invalidates the token.
pub fn issue_access_token(
    email: &str,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), AuthServiceError> {
    let iat = now_secs();
    let exp = iat + ACCESS_TOKEN_TTL_SECS;
    let claims = JwtClaims {
        sub: email.to_owned(),
        role: role.as_str().to_owned(),
        iat,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Outcome of a login attempt with correct credentials.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated {
        access_token: String,
        access_token_exp: u64,
    },
    /// Email not yet verified: a fresh OTP has been issued, superseding any
    /// prior one. No token until verification.
    Unverified { user_id: i32 },
}

pub struct LoginUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailTransport,
{
    pub users: U,
    pub otps: O,
    pub mailer: M,
    pub jwt_secret: String,
}

impl<U, O, M> LoginUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailTransport,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutcome, AuthServiceError> {
        // Unknown email and wrong password produce the same failure.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        if user.blocked {
            return Err(AuthServiceError::AccountBlocked);
        }

        if !user.email_verified {
            issue_otp(&self.otps, &self.mailer, &user.email).await?;
            return Ok(LoginOutcome::Unverified { user_id: user.id });
        }

        let (access_token, access_token_exp) =
            issue_access_token(&user.email, user.role, &self.jwt_secret)?;
        Ok(LoginOutcome::Authenticated {
            access_token,
            access_token_exp,
        })
    }
}

// ── Refresh ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

/// Issue a new token against a still-valid presented token. The old token is
/// not invalidated — both remain valid until each expires on its own.
pub struct RefreshUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> RefreshUseCase<U> {
    pub async fn execute(&self, token: &str) -> Result<RefreshOutput, AuthServiceError> {
        let info = validate_access_token(token, &self.jwt_secret).map_err(|e| match e {
            TokenError::Expired => AuthServiceError::TokenExpired,
            TokenError::Malformed => AuthServiceError::TokenMalformed,
        })?;

        let user = self
            .users
            .find_by_email(&info.email)
            .await?
            .ok_or(AuthServiceError::Unauthenticated)?;

        if user.blocked {
            return Err(AuthServiceError::AccountBlocked);
        }

        let (access_token, access_token_exp) =
            issue_access_token(&user.email, user.role, &self.jwt_secret)?;
        Ok(RefreshOutput {
            access_token,
            access_token_exp,
        })
    }
}

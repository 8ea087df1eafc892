use chrono::{Duration, Utc};
use rand::RngExt;

use jobsify_domain::user::UserRole;

use crate::domain::repository::{MailTransport, OtpRepository, UserRepository};
use crate::domain::types::{OTP_TTL_SECS, PendingOtp};
use crate::error::AuthServiceError;
use crate::usecase::token::issue_access_token;

const OTP_MAIL_SUBJECT: &str = "Your Jobsify verification code";

fn generate_otp_code() -> String {
    let mut rng = rand::rng();
    // Uniform over 000000–999999, left-zero-padded.
    format!("{:06}", rng.random_range(0..1_000_000))
}

/// Generate a fresh code for this email, overwrite any prior one, and hand
/// it to the mail transport. Delivery failure is logged and suppressed: the
/// code stays valid even if the email never arrives, and transport errors
/// must not leak into the registration flow.
pub async fn issue_otp<O, M>(otps: &O, mailer: &M, email: &str) -> Result<(), AuthServiceError>
where
    O: OtpRepository,
    M: MailTransport,
{
    let now = Utc::now();
    let otp = PendingOtp {
        email: email.to_owned(),
        code: generate_otp_code(),
        expires_at: now + Duration::seconds(OTP_TTL_SECS),
        created_at: now,
    };
    otps.upsert(&otp).await?;

    let body = format!(
        "Your Jobsify verification code is {}. It expires in 10 minutes.",
        otp.code
    );
    if let Err(e) = mailer.send(email, OTP_MAIL_SUBJECT, &body).await {
        tracing::warn!(error = %e, email, "OTP mail delivery failed; code remains valid");
    }
    Ok(())
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub user_id: i32,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub access_token: String,
    pub access_token_exp: u64,
    pub role: UserRole,
}

pub struct VerifyOtpUseCase<U: UserRepository, O: OtpRepository> {
    pub users: U,
    pub otps: O,
    pub jwt_secret: String,
}

impl<U: UserRepository, O: OtpRepository> VerifyOtpUseCase<U, O> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, AuthServiceError> {
        let user = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        if user.blocked {
            return Err(AuthServiceError::AccountBlocked);
        }

        let otp = self
            .otps
            .find_by_email(&user.email)
            .await?
            .ok_or(AuthServiceError::OtpNotFound)?;

        if otp.is_expired() {
            // Left in place; reissue overwrites it.
            return Err(AuthServiceError::OtpExpired);
        }
        if otp.code != input.code {
            // Left in place so the user can retry until expiry.
            return Err(AuthServiceError::OtpMismatch);
        }

        // Single-use: consume before any token leaves the building.
        self.otps.delete(&user.email).await?;
        self.users.set_verified(user.id).await?;

        let (access_token, access_token_exp) =
            issue_access_token(&user.email, user.role, &self.jwt_secret)?;
        Ok(VerifyOtpOutput {
            access_token,
            access_token_exp,
            role: user.role,
        })
    }
}

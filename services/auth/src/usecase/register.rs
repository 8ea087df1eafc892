use jobsify_domain::user::UserRole;

use crate::domain::repository::{MailTransport, OtpRepository, UserRepository};
use crate::domain::types::{NewUser, User, validate_password};
use crate::error::AuthServiceError;
use crate::usecase::hasher::hash_password;
use crate::usecase::otp::issue_otp;

pub struct RegisterInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

pub struct RegisterUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailTransport,
{
    pub users: U,
    pub otps: O,
    pub mailer: M,
}

impl<U, O, M> RegisterUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailTransport,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<User, AuthServiceError> {
        // 1. Policy check before any hashing work.
        if !validate_password(&input.password) {
            return Err(AuthServiceError::WeakPassword);
        }

        // 2. Fast-path duplicate rejection. Not atomic with the insert —
        //    the unique constraint below is what actually holds the line
        //    under concurrent registration.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AuthServiceError::DuplicateEmail);
        }

        // 3. Hash + insert, unverified.
        let password_hash = hash_password(&input.password)?;
        let user = self
            .users
            .create(&NewUser {
                email: input.email,
                password_hash,
                name: input.name,
                phone: input.phone,
                role: input.role,
            })
            .await?;

        // 4. Issue the verification code; mail failure is already swallowed
        //    inside issue_otp.
        issue_otp(&self.otps, &self.mailer, &user.email).await?;

        Ok(user)
    }
}

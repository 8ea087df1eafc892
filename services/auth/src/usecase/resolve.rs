use jobsify_auth_types::token::validate_access_token;
use jobsify_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AuthServiceError;

/// Bearer values some clients send instead of omitting the header.
/// Rejected before any signature work.
fn is_placeholder(token: &str) -> bool {
    let t = token.trim();
    t.is_empty() || t == "null" || t == "undefined"
}

async fn resolve<U: UserRepository>(
    users: &U,
    jwt_secret: &str,
    token: &str,
) -> Result<User, AuthServiceError> {
    if is_placeholder(token) {
        return Err(AuthServiceError::Unauthenticated);
    }
    // Expired, tampered and garbled tokens all collapse to Unauthenticated
    // here — the distinction only matters on the refresh path.
    let info =
        validate_access_token(token, jwt_secret).map_err(|_| AuthServiceError::Unauthenticated)?;

    users
        .find_by_email(&info.email)
        .await?
        .ok_or(AuthServiceError::Unauthenticated)
}

// ── ResolveUser ──────────────────────────────────────────────────────────────

pub struct ResolveUserUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> ResolveUserUseCase<U> {
    pub async fn execute(&self, token: &str) -> Result<User, AuthServiceError> {
        resolve(&self.users, &self.jwt_secret, token).await
    }
}

// ── ResolveAdmin ─────────────────────────────────────────────────────────────

pub struct ResolveAdminUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub admin_emails: Vec<String>,
}

impl<U: UserRepository> ResolveAdminUseCase<U> {
    /// Resolve the token and require the admin role.
    ///
    /// Allow-listed emails whose stored role is not yet admin are promoted
    /// in place before returning. Live promotion on an authenticated request
    /// is intentional (the startup provisioning pass covers accounts that
    /// existed before the allow-list did); see also
    /// [`ensure_admin_provisioning`](crate::usecase::provision::ensure_admin_provisioning).
    pub async fn execute(&self, token: &str) -> Result<User, AuthServiceError> {
        let mut user = resolve(&self.users, &self.jwt_secret, token).await?;

        if !user.role.is_admin() {
            if !self.admin_emails.iter().any(|e| e == &user.email) {
                return Err(AuthServiceError::NotAdmin);
            }
            self.users.set_role(user.id, UserRole::Admin).await?;
            tracing::info!(email = %user.email, "promoted allow-listed user to admin");
            user.role = UserRole::Admin;
        }

        Ok(user)
    }
}

use jobsify_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::error::AuthServiceError;

/// Startup pass over the admin allow-list: any existing user on the list
/// whose stored role is not admin is promoted and marked verified.
///
/// Accounts are never created here — an allow-listed address that has not
/// registered is picked up by the live promotion in the admin resolver once
/// it does.
pub async fn ensure_admin_provisioning<U: UserRepository>(
    users: &U,
    admin_emails: &[String],
) -> Result<(), AuthServiceError> {
    for email in admin_emails {
        match users.find_by_email(email).await? {
            Some(user) if !user.role.is_admin() => {
                users.set_role(user.id, UserRole::Admin).await?;
                if !user.email_verified {
                    users.set_verified(user.id).await?;
                }
                tracing::info!(email = %email, "provisioned allow-listed admin");
            }
            Some(_) => {}
            None => {
                tracing::debug!(email = %email, "allow-listed admin not registered yet");
            }
        }
    }
    Ok(())
}

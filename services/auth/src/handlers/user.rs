use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use jobsify_auth_types::bearer::BearerToken;
use jobsify_core::serde::to_rfc3339_ms;
use jobsify_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::resolve::ResolveUserUseCase;

/// User record as exposed over HTTP. The password hash never leaves the
/// service.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub email_verified: bool,
    pub blocked: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            email_verified: user.email_verified,
            blocked: user.blocked,
            created_at: user.created_at,
        }
    }
}

// ── GET /users/me ────────────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = ResolveUserUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let user = usecase.execute(&token).await?;
    Ok(Json(UserResponse::from(user)))
}

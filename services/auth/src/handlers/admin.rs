use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use jobsify_auth_types::bearer::BearerToken;

use crate::domain::repository::UserRepository;
use crate::error::AuthServiceError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::resolve::ResolveAdminUseCase;

fn resolve_admin(state: &AppState) -> ResolveAdminUseCase<crate::infra::db::DbUserRepository> {
    ResolveAdminUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        admin_emails: state.admin_emails.clone(),
    }
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<UserResponse>>, AuthServiceError> {
    resolve_admin(&state).execute(&token).await?;

    let users = state.user_repo().list_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── PUT /admin/users/block ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BlockUserQuery {
    pub user_id: i32,
}

#[derive(Serialize)]
pub struct BlockUserResponse {
    pub message: &'static str,
    pub user_id: i32,
}

pub async fn block_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<BlockUserQuery>,
) -> Result<Json<BlockUserResponse>, AuthServiceError> {
    resolve_admin(&state).execute(&token).await?;

    let users = state.user_repo();
    let user = users
        .find_by_id(query.user_id)
        .await?
        .ok_or(AuthServiceError::UserNotFound)?;
    users.set_blocked(user.id).await?;

    Ok(Json(BlockUserResponse {
        message: "user blocked",
        user_id: user.id,
    }))
}

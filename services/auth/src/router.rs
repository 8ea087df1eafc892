use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use jobsify_core::health::{healthz, readyz};
use jobsify_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{block_user, list_users},
    auth::{login, refresh, register, verify_otp},
    user::get_me,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/verify-otp", post(verify_otp))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        // User
        .route("/users/me", get(get_me))
        // Admin
        .route("/admin/users", get(list_users))
        .route("/admin/users/block", put(block_user))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

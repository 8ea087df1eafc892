use axum::http::StatusCode;

/// `GET /healthz` — process liveness. 200 for as long as the process can
/// answer at all.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness to take traffic. The auth service has no
/// warm-up phase, so this is equivalent to liveness; a service that needs
/// a real readiness gate mounts its own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

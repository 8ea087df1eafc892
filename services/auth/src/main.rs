use sea_orm::Database;
use tracing::info;

use jobsify_auth::config::AuthConfig;
use jobsify_auth::infra::mail::HttpMailTransport;
use jobsify_auth::router::build_router;
use jobsify_auth::state::AppState;
use jobsify_auth::usecase::provision::ensure_admin_provisioning;
use jobsify_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailTransport {
        client: reqwest::Client::new(),
        api_url: config.mail_api_url,
        api_key: config.mail_api_key,
        from: config.mail_from,
    };

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        admin_emails: config.admin_emails,
        mailer,
    };

    // Promote allow-listed accounts that predate the allow-list before
    // serving traffic; the resolver handles anything registered afterwards.
    ensure_admin_provisioning(&state.user_repo(), &state.admin_emails)
        .await
        .expect("admin provisioning failed");

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

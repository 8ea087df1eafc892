/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT session tokens.
    pub jwt_secret: String,
    /// Mail relay endpoint accepting `{from, to, subject, body}` JSON.
    pub mail_api_url: String,
    /// Bearer key for the mail relay.
    pub mail_api_key: String,
    /// Sender address for OTP mail. Env var: `MAIL_FROM`.
    pub mail_from: String,
    /// Emails granted the admin role by static configuration,
    /// comma-separated. Env var: `ADMIN_EMAILS`.
    pub admin_emails: Vec<String>,
    /// TCP port to listen on (default 8000). Env var: `AUTH_PORT`.
    pub auth_port: u16,
}

const DEFAULT_ADMIN_EMAILS: &str =
    "admin@jobsify.com,jobsify.admin@gmail.com,superadmin@jobsify.com";

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "no-reply@jobsify.com".to_owned()),
            admin_emails: parse_admin_emails(
                &std::env::var("ADMIN_EMAILS")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_EMAILS.to_owned()),
            ),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

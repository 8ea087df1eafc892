use sea_orm::DatabaseConnection;

use crate::infra::db::{DbOtpRepository, DbUserRepository};
use crate::infra::mail::HttpMailTransport;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub admin_emails: Vec<String>,
    pub mailer: HttpMailTransport,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> HttpMailTransport {
        self.mailer.clone()
    }
}

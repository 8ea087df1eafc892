use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("password must be at least 8 characters with upper, lower and digit")]
    WeakPassword,
    /// Deliberately undifferentiated — never reveals whether the email or
    /// the password was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("account blocked")]
    AccountBlocked,
    #[error("no verification code outstanding")]
    OtpNotFound,
    #[error("verification code expired")]
    OtpExpired,
    #[error("verification code incorrect")]
    OtpMismatch,
    #[error("token expired")]
    TokenExpired,
    #[error("malformed token")]
    TokenMalformed,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("admin access required")]
    NotAdmin,
    #[error("user not found")]
    UserNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountBlocked => "ACCOUNT_BLOCKED",
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpMismatch => "OTP_MISMATCH",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenMalformed => "TOKEN_MALFORMED",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::NotAdmin => "NOT_ADMIN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::WeakPassword => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::OtpNotFound
            | Self::OtpExpired
            | Self::OtpMismatch
            | Self::TokenExpired
            | Self::TokenMalformed
            | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::AccountBlocked | Self::NotAdmin => StatusCode::FORBIDDEN,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

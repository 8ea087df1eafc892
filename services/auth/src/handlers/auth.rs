use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use jobsify_auth_types::bearer::BearerToken;
use jobsify_domain::user::UserRole;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{VerifyOtpInput, VerifyOtpUseCase};
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::usecase::token::{LoginInput, LoginOutcome, LoginUseCase, RefreshUseCase};

// ── POST /auth/register ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: i32,
    pub role: UserRole,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthServiceError> {
    // Admin is never self-assignable; only the allow-list grants it.
    let role = match body.role.unwrap_or(UserRole::Seeker) {
        UserRole::Admin => return Err(AuthServiceError::NotAdmin),
        role => role,
    };

    let usecase = RegisterUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
    };
    let user = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "registered; verification code sent",
            user_id: user.id,
            role: user.role,
        }),
    ))
}

// ── POST /auth/verify-otp ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub user_id: i32,
    pub code: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<TokenResponse>, AuthServiceError> {
    let usecase = VerifyOtpUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            user_id: body.user_id,
            code: body.code,
        })
        .await?;

    Ok(Json(TokenResponse {
        access_token: out.access_token,
        access_token_exp: out.access_token_exp,
    }))
}

// ── POST /auth/login ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Token {
        access_token: String,
        access_token_exp: u64,
    },
    Unverified { unverified: bool, user_id: i32 },
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let outcome = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let response = match outcome {
        LoginOutcome::Authenticated {
            access_token,
            access_token_exp,
        } => LoginResponse::Token {
            access_token,
            access_token_exp,
        },
        LoginOutcome::Unverified { user_id } => LoginResponse::Unverified {
            unverified: true,
            user_id,
        },
    };
    Ok(Json(response))
}

// ── POST /auth/refresh ────────────────────────────────────────────────────────

pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<TokenResponse>, AuthServiceError> {
    let usecase = RefreshUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&token).await?;

    Ok(Json(TokenResponse {
        access_token: out.access_token,
        access_token_exp: out.access_token_exp,
    }))
}

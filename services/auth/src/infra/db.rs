use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr, sea_query::OnConflict,
};

use jobsify_auth_schema::{pending_otps, users};
use jobsify_domain::user::UserRole;

use crate::domain::repository::{OtpRepository, UserRepository};
use crate::domain::types::{NewUser, PendingOtp, User};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, AuthServiceError> {
        let now = Utc::now();
        let inserted = users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            name: Set(user.name.clone()),
            phone: Set(user.phone.clone()),
            role: Set(user.role.as_str().to_owned()),
            email_verified: Set(false),
            blocked: Set(false),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The unique index on email turns the check-then-insert race
            // into a detectable failure.
            Some(SqlErr::UniqueConstraintViolation(_)) => AuthServiceError::DuplicateEmail,
            _ => AuthServiceError::Internal(anyhow::Error::new(e).context("create user")),
        })?;
        user_from_model(inserted)
    }

    async fn list_all(&self) -> Result<Vec<User>, AuthServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn set_verified(&self, id: i32) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            email_verified: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set user verified")?;
        Ok(())
    }

    async fn set_role(&self, id: i32, role: UserRole) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            role: Set(role.as_str().to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set user role")?;
        Ok(())
    }

    async fn set_blocked(&self, id: i32) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            blocked: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set user blocked")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, AuthServiceError> {
    let role = UserRole::from_str(&model.role).ok_or_else(|| {
        AuthServiceError::Internal(anyhow::anyhow!(
            "unknown role {:?} for user {}",
            model.role,
            model.id
        ))
    })?;
    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        phone: model.phone,
        role,
        email_verified: model.email_verified,
        blocked: model.blocked,
        created_at: model.created_at,
    })
}

// ── OTP repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn upsert(&self, otp: &PendingOtp) -> Result<(), AuthServiceError> {
        let model = pending_otps::ActiveModel {
            email: Set(otp.email.clone()),
            code: Set(otp.code.clone()),
            expires_at: Set(otp.expires_at),
            created_at: Set(otp.created_at),
        };
        // Last write wins per email: reissue supersedes the outstanding code.
        pending_otps::Entity::insert(model)
            .on_conflict(
                OnConflict::column(pending_otps::Column::Email)
                    .update_columns([
                        pending_otps::Column::Code,
                        pending_otps::Column::ExpiresAt,
                        pending_otps::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert pending otp")?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<PendingOtp>, AuthServiceError> {
        let model = pending_otps::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find pending otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn delete(&self, email: &str) -> Result<(), AuthServiceError> {
        pending_otps::Entity::delete_by_id(email.to_owned())
            .exec(&self.db)
            .await
            .context("delete pending otp")?;
        Ok(())
    }
}

fn otp_from_model(model: pending_otps::Model) -> PendingOtp {
    PendingOtp {
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

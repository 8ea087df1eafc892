use sea_orm::entity::prelude::*;

/// User credential record.
///
/// `email` carries a unique index — the constraint, not the pre-insert
/// lookup, is the source of truth for duplicate registration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// "seeker" / "provider" / "admin".
    pub role: String,
    pub email_verified: bool,
    pub blocked: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

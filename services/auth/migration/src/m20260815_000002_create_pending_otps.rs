use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PendingOtps::Email)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PendingOtps::Code).string().not_null())
                    .col(
                        ColumnDef::new(PendingOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PendingOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PendingOtps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PendingOtps {
    Table,
    Email,
    Code,
    ExpiresAt,
    CreatedAt,
}

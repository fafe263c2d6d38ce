use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(uuid(Vendor::Id).primary_key())
                    .col(string_len(Vendor::Username, 100).not_null().unique_key())
                    .col(string(Vendor::PasswordHash).not_null())
                    .col(string_len(Vendor::CompanyName, 100).not_null())
                    .col(string_null(Vendor::ProfileImage))
                    .col(double(Vendor::Rating).not_null().default(0.0))
                    .col(string_len(Vendor::Location, 100).not_null())
                    .col(
                        timestamp_with_time_zone(Vendor::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vendor {
    Table,
    Id,
    Username,
    PasswordHash,
    CompanyName,
    ProfileImage,
    Rating,
    Location,
    CreatedAt,
}

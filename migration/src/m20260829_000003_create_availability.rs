use sea_orm_migration::{prelude::*, schema::*};

use super::m20260829_000002_create_services::Service;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Availability::Table)
                    .if_not_exists()
                    .col(uuid(Availability::Id).primary_key())
                    .col(uuid(Availability::ServiceId).not_null())
                    .col(date(Availability::Date).not_null())
                    .col(boolean(Availability::IsBlocked).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_service")
                            .from(Availability::Table, Availability::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One availability row per (service, date)
        manager
            .create_index(
                Index::create()
                    .name("idx_availability_service_date")
                    .table(Availability::Table)
                    .col(Availability::ServiceId)
                    .col(Availability::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Availability {
    Table,
    Id,
    ServiceId,
    Date,
    IsBlocked,
}

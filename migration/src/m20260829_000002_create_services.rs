use sea_orm_migration::{prelude::*, schema::*};

use super::m20260829_000001_create_vendors::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(uuid(Service::VendorId).not_null())
                    .col(string_len(Service::Name, 100).not_null())
                    .col(string_len(Service::Category, 50).not_null())
                    .col(double(Service::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_vendor")
                            .from(Service::Table, Service::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    VendorId,
    Name,
    Category,
    Price,
}

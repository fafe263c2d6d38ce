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
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::ServiceId).not_null())
                    .col(string_len(Booking::CustomerName, 100).not_null())
                    .col(date(Booking::Date).not_null())
                    .col(integer(Booking::Guests).not_null())
                    .col(double(Booking::TotalCost).not_null())
                    .col(boolean(Booking::Confirmed).not_null().default(false))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service")
                            .from(Booking::Table, Booking::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    ServiceId,
    CustomerName,
    Date,
    Guests,
    TotalCost,
    Confirmed,
    CreatedAt,
}

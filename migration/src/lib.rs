pub use sea_orm_migration::prelude::*;

mod m20260829_000001_create_vendors;
mod m20260829_000002_create_services;
mod m20260829_000003_create_availability;
mod m20260829_000004_create_bookings;
mod m20260829_000005_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_vendors::Migration),
            Box::new(m20260829_000002_create_services::Migration),
            Box::new(m20260829_000003_create_availability::Migration),
            Box::new(m20260829_000004_create_bookings::Migration),
            Box::new(m20260829_000005_create_reviews::Migration),
        ]
    }
}

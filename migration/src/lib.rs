pub use sea_orm_migration::prelude::*;

mod m20251101_000001_rishta_user;
mod m20251101_000002_rishta_profile;
mod m20251101_000003_rishta_profile_photo;
mod m20251101_000004_rishta_entitlement;
mod m20251101_000005_rishta_entitlement_unlock;
mod m20251101_000006_rishta_payment_request;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_rishta_user::Migration),
            Box::new(m20251101_000002_rishta_profile::Migration),
            Box::new(m20251101_000003_rishta_profile_photo::Migration),
            Box::new(m20251101_000004_rishta_entitlement::Migration),
            Box::new(m20251101_000005_rishta_entitlement_unlock::Migration),
            Box::new(m20251101_000006_rishta_payment_request::Migration),
        ]
    }
}

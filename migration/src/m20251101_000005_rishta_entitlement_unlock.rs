use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_rishta_entitlement::RishtaEntitlement;

static FK_ENTITLEMENT_UNLOCK_ENTITLEMENT_ID: &str = "fk-rishta_entitlement_unlock-entitlement_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // profile_id has no foreign key: an unlock survives deletion of the profile
        manager
            .create_table(
                Table::create()
                    .table(RishtaEntitlementUnlock::Table)
                    .if_not_exists()
                    .col(integer(RishtaEntitlementUnlock::EntitlementId))
                    .col(integer(RishtaEntitlementUnlock::ProfileId))
                    .col(timestamp(RishtaEntitlementUnlock::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(RishtaEntitlementUnlock::EntitlementId)
                            .col(RishtaEntitlementUnlock::ProfileId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENTITLEMENT_UNLOCK_ENTITLEMENT_ID)
                    .from_tbl(RishtaEntitlementUnlock::Table)
                    .from_col(RishtaEntitlementUnlock::EntitlementId)
                    .to_tbl(RishtaEntitlement::Table)
                    .to_col(RishtaEntitlement::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENTITLEMENT_UNLOCK_ENTITLEMENT_ID)
                    .table(RishtaEntitlementUnlock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(RishtaEntitlementUnlock::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RishtaEntitlementUnlock {
    Table,
    EntitlementId,
    ProfileId,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_rishta_user::RishtaUser;

static FK_ENTITLEMENT_OWNER_ID: &str = "fk-rishta_entitlement-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RishtaEntitlement::Table)
                    .if_not_exists()
                    .col(pk_auto(RishtaEntitlement::Id))
                    .col(integer_uniq(RishtaEntitlement::OwnerId))
                    .col(string_uniq(RishtaEntitlement::AccessToken))
                    .col(integer(RishtaEntitlement::MaxCredits))
                    .col(integer(RishtaEntitlement::RemainingCredits))
                    .col(integer(RishtaEntitlement::ConsumedCount).default(0))
                    .col(timestamp(RishtaEntitlement::ValidFrom))
                    .col(timestamp(RishtaEntitlement::ValidTo))
                    .col(text(RishtaEntitlement::Status))
                    .col(timestamp(RishtaEntitlement::CreatedAt))
                    .col(timestamp(RishtaEntitlement::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENTITLEMENT_OWNER_ID)
                    .from_tbl(RishtaEntitlement::Table)
                    .from_col(RishtaEntitlement::OwnerId)
                    .to_tbl(RishtaUser::Table)
                    .to_col(RishtaUser::Id)
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
                    .name(FK_ENTITLEMENT_OWNER_ID)
                    .table(RishtaEntitlement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RishtaEntitlement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RishtaEntitlement {
    Table,
    Id,
    OwnerId,
    AccessToken,
    MaxCredits,
    RemainingCredits,
    ConsumedCount,
    ValidFrom,
    ValidTo,
    Status,
    CreatedAt,
    UpdatedAt,
}

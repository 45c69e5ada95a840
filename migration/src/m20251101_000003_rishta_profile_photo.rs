use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_rishta_profile::RishtaProfile;

static IDX_PROFILE_PHOTO_PROFILE_ID: &str = "idx-rishta_profile_photo-profile_id";
static FK_PROFILE_PHOTO_PROFILE_ID: &str = "fk-rishta_profile_photo-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RishtaProfilePhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(RishtaProfilePhoto::Id))
                    .col(integer(RishtaProfilePhoto::ProfileId))
                    .col(string(RishtaProfilePhoto::StorageKey))
                    .col(boolean(RishtaProfilePhoto::IsPrimary).default(false))
                    .col(integer(RishtaProfilePhoto::Position).default(0))
                    .col(timestamp(RishtaProfilePhoto::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROFILE_PHOTO_PROFILE_ID)
                    .table(RishtaProfilePhoto::Table)
                    .col(RishtaProfilePhoto::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_PHOTO_PROFILE_ID)
                    .from_tbl(RishtaProfilePhoto::Table)
                    .from_col(RishtaProfilePhoto::ProfileId)
                    .to_tbl(RishtaProfile::Table)
                    .to_col(RishtaProfile::Id)
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
                    .name(FK_PROFILE_PHOTO_PROFILE_ID)
                    .table(RishtaProfilePhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROFILE_PHOTO_PROFILE_ID)
                    .table(RishtaProfilePhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RishtaProfilePhoto::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RishtaProfilePhoto {
    Table,
    Id,
    ProfileId,
    StorageKey,
    IsPrimary,
    Position,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_rishta_user::RishtaUser;

static IDX_PROFILE_OWNER_ID: &str = "idx-rishta_profile-owner_id";
static FK_PROFILE_OWNER_ID: &str = "fk-rishta_profile-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RishtaProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(RishtaProfile::Id))
                    .col(integer(RishtaProfile::OwnerId))
                    .col(string_uniq(RishtaProfile::Code))
                    .col(string(RishtaProfile::FirstName))
                    .col(string(RishtaProfile::Surname))
                    .col(date(RishtaProfile::DateOfBirth))
                    .col(integer_null(RishtaProfile::HeightCm))
                    .col(string(RishtaProfile::MaritalStatus))
                    .col(string_null(RishtaProfile::Caste))
                    .col(string_null(RishtaProfile::Gotra))
                    .col(string_null(RishtaProfile::Education))
                    .col(string_null(RishtaProfile::Occupation))
                    .col(string_null(RishtaProfile::City))
                    .col(string_null(RishtaProfile::State))
                    .col(string_null(RishtaProfile::ContactNumber))
                    .col(text_null(RishtaProfile::PostalAddress))
                    .col(text_null(RishtaProfile::About))
                    .col(boolean(RishtaProfile::IsPublished).default(false))
                    .col(boolean(RishtaProfile::IsActive).default(true))
                    .col(boolean(RishtaProfile::IsDeleted).default(false))
                    .col(boolean(RishtaProfile::IsUnlocked).default(false))
                    .col(timestamp(RishtaProfile::CreatedAt))
                    .col(timestamp(RishtaProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROFILE_OWNER_ID)
                    .table(RishtaProfile::Table)
                    .col(RishtaProfile::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_OWNER_ID)
                    .from_tbl(RishtaProfile::Table)
                    .from_col(RishtaProfile::OwnerId)
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
                    .name(FK_PROFILE_OWNER_ID)
                    .table(RishtaProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROFILE_OWNER_ID)
                    .table(RishtaProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RishtaProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RishtaProfile {
    Table,
    Id,
    OwnerId,
    Code,
    FirstName,
    Surname,
    DateOfBirth,
    HeightCm,
    MaritalStatus,
    Caste,
    Gotra,
    Education,
    Occupation,
    City,
    State,
    ContactNumber,
    PostalAddress,
    About,
    IsPublished,
    IsActive,
    IsDeleted,
    IsUnlocked,
    CreatedAt,
    UpdatedAt,
}

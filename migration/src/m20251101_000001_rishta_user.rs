use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RishtaUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RishtaUser::Id))
                    .col(string_uniq(RishtaUser::Username))
                    .col(string_uniq(RishtaUser::Email))
                    .col(timestamp(RishtaUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RishtaUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RishtaUser {
    Table,
    Id,
    Username,
    Email,
    CreatedAt,
}

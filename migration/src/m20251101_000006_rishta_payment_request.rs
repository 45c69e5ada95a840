use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_rishta_user::RishtaUser;

static IDX_PAYMENT_REQUEST_STATUS: &str = "idx-rishta_payment_request-status";
static IDX_PAYMENT_REQUEST_REQUESTER_ID: &str = "idx-rishta_payment_request-requester_id";
static FK_PAYMENT_REQUEST_REQUESTER_ID: &str = "fk-rishta_payment_request-requester_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RishtaPaymentRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(RishtaPaymentRequest::Id))
                    .col(integer(RishtaPaymentRequest::RequesterId))
                    .col(text(RishtaPaymentRequest::Plan))
                    .col(string(RishtaPaymentRequest::ReferenceCode))
                    .col(string(RishtaPaymentRequest::ProofKey))
                    .col(text(RishtaPaymentRequest::Status))
                    .col(integer_null(RishtaPaymentRequest::EffectiveCredits))
                    .col(integer_null(RishtaPaymentRequest::ReviewerId))
                    .col(text_null(RishtaPaymentRequest::ReviewNotes))
                    .col(timestamp_null(RishtaPaymentRequest::DecidedAt))
                    .col(timestamp(RishtaPaymentRequest::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_REQUEST_STATUS)
                    .table(RishtaPaymentRequest::Table)
                    .col(RishtaPaymentRequest::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_REQUEST_REQUESTER_ID)
                    .table(RishtaPaymentRequest::Table)
                    .col(RishtaPaymentRequest::RequesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_REQUEST_REQUESTER_ID)
                    .from_tbl(RishtaPaymentRequest::Table)
                    .from_col(RishtaPaymentRequest::RequesterId)
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
                    .name(FK_PAYMENT_REQUEST_REQUESTER_ID)
                    .table(RishtaPaymentRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_REQUEST_REQUESTER_ID)
                    .table(RishtaPaymentRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_REQUEST_STATUS)
                    .table(RishtaPaymentRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RishtaPaymentRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RishtaPaymentRequest {
    Table,
    Id,
    RequesterId,
    Plan,
    ReferenceCode,
    ProofKey,
    Status,
    EffectiveCredits,
    ReviewerId,
    ReviewNotes,
    DecidedAt,
    CreatedAt,
}

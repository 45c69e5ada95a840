use chrono::NaiveDateTime;
use entity::rishta_payment_request::{PaymentPlan, PaymentStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Terminal state written by [`PaymentRequestRepository::mark_decided`]
#[derive(Clone, Debug)]
pub struct PaymentDecisionRecord {
    pub status: PaymentStatus,
    pub reviewer_id: i32,
    pub review_notes: Option<String>,
    pub effective_credits: Option<i32>,
    pub decided_at: NaiveDateTime,
}

pub struct PaymentRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRequestRepository<'a, C> {
    /// Creates a new instance of [`PaymentRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending payment request
    pub async fn create(
        &self,
        requester_id: i32,
        plan: PaymentPlan,
        reference_code: String,
        proof_key: String,
        created_at: NaiveDateTime,
    ) -> Result<entity::rishta_payment_request::Model, DbErr> {
        let request = entity::rishta_payment_request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            plan: ActiveValue::Set(plan),
            reference_code: ActiveValue::Set(reference_code),
            proof_key: ActiveValue::Set(proof_key),
            status: ActiveValue::Set(PaymentStatus::Pending),
            effective_credits: ActiveValue::Set(None),
            reviewer_id: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            decided_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::rishta_payment_request::Model>, DbErr> {
        entity::prelude::RishtaPaymentRequest::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Gets every pending request, oldest first
    pub async fn get_pending(&self) -> Result<Vec<entity::rishta_payment_request::Model>, DbErr> {
        use entity::rishta_payment_request::Column;

        entity::prelude::RishtaPaymentRequest::find()
            .filter(Column::Status.eq(PaymentStatus::Pending))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every request submitted by `requester_id`, newest first
    pub async fn get_by_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<entity::rishta_payment_request::Model>, DbErr> {
        use entity::rishta_payment_request::Column;

        entity::prelude::RishtaPaymentRequest::find()
            .filter(Column::RequesterId.eq(requester_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a pending request into its terminal state
    ///
    /// # Returns
    /// - `Ok(true)` - The request was pending and is now decided
    /// - `Ok(false)` - The request does not exist or was already decided
    pub async fn mark_decided(
        &self,
        request_id: i32,
        decision: PaymentDecisionRecord,
    ) -> Result<bool, DbErr> {
        use entity::rishta_payment_request::Column;

        let result = entity::prelude::RishtaPaymentRequest::update_many()
            .col_expr(Column::Status, Expr::value(decision.status))
            .col_expr(Column::ReviewerId, Expr::value(Some(decision.reviewer_id)))
            .col_expr(Column::ReviewNotes, Expr::value(decision.review_notes))
            .col_expr(
                Column::EffectiveCredits,
                Expr::value(decision.effective_credits),
            )
            .col_expr(Column::DecidedAt, Expr::value(Some(decision.decided_at)))
            .filter(Column::Id.eq(request_id))
            .filter(Column::Status.eq(PaymentStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

use chrono::Utc;
use entity::rishta_payment_request::{PaymentPlan, PaymentStatus};
use object_store::{path::Path, ObjectStore, PutPayload};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_IMAGE_BYTES, TestContext, TestError};

pub struct PaymentFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

impl<'a> PaymentFixtures<'a> {
    /// Insert a pending payment request with a stored proof object.
    pub async fn insert_pending_request(
        &self,
        requester_id: i32,
        plan: PaymentPlan,
    ) -> Result<entity::rishta_payment_request::Model, TestError> {
        self.insert_request(requester_id, plan, PaymentStatus::Pending)
            .await
    }

    /// Insert a payment request in the provided status with a stored proof object.
    ///
    /// Terminal requests get reviewer-less decision metadata so they look processed.
    pub async fn insert_request(
        &self,
        requester_id: i32,
        plan: PaymentPlan,
        status: PaymentStatus,
    ) -> Result<entity::rishta_payment_request::Model, TestError> {
        let now = Utc::now().naive_utc();
        let proof_key = format!(
            "payments/{}/proof-{}",
            requester_id,
            now.and_utc().timestamp_nanos_opt().unwrap_or_default()
        );

        self.setup
            .media
            .put(&Path::from(proof_key.as_str()), PutPayload::from_static(TEST_IMAGE_BYTES))
            .await?;

        let decided_at = match status {
            PaymentStatus::Pending => None,
            PaymentStatus::Approved | PaymentStatus::Rejected => Some(now),
        };

        let request = entity::rishta_payment_request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            plan: ActiveValue::Set(plan),
            reference_code: ActiveValue::Set(format!("UTR{}", requester_id)),
            proof_key: ActiveValue::Set(proof_key),
            status: ActiveValue::Set(status),
            effective_credits: ActiveValue::Set(None),
            reviewer_id: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            decided_at: ActiveValue::Set(decided_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(request.insert(&self.setup.db).await?)
    }
}

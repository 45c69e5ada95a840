use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::entitlement::EntitlementDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanIdDto {
    Basic,
    Standard,
    Premium,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanDto {
    pub id: PlanIdDto,
    pub credits_granted: i32,
    /// Price in whole rupees
    pub price: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatusDto {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentRequestDto {
    pub id: i32,
    pub requester_id: i32,
    pub plan: PlanIdDto,
    pub reference_code: String,
    pub status: PaymentStatusDto,
    pub effective_credits: Option<i32>,
    pub reviewer_id: Option<i32>,
    pub review_notes: Option<String>,
    pub decided_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// A pending payment request together with a time-limited link to its proof
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PendingPaymentDto {
    pub request: PaymentRequestDto,
    pub proof_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionDto {
    Approve,
    Reject,
}

/// Body of `POST /api/payments/{id}/decide`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DecidePaymentDto {
    pub decision: DecisionDto,
    pub notes: Option<String>,
    /// Replaces the plan's credit count on approval, must be positive
    pub override_credits: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DecisionResultDto {
    pub request: PaymentRequestDto,
    /// The requester's entitlement after an approval, absent on rejection
    pub entitlement: Option<EntitlementDto>,
}

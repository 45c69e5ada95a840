use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::profile::ProfileViewDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementStatusDto {
    Pending,
    Active,
    Expired,
    Revoked,
}

/// A viewer's credit balance and validity window
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EntitlementDto {
    pub access_token: String,
    pub max_credits: i32,
    pub remaining_credits: i32,
    pub consumed_count: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub status: EntitlementStatusDto,
    /// Whether the record can currently be used to unlock a profile
    pub is_usable: bool,
}

/// Response of `GET /api/entitlement/me`, `entitlement` is null for users who never subscribed
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EntitlementSummaryDto {
    pub entitlement: Option<EntitlementDto>,
}

/// Admin credit adjustment, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdjustEntitlementDto {
    pub max_credits: Option<i32>,
    pub remaining_credits: Option<i32>,
    pub valid_to: Option<NaiveDateTime>,
    pub status: Option<EntitlementStatusDto>,
}

/// Response of `POST /api/profiles/{id}/unlock`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnlockResultDto {
    pub already_unlocked: bool,
    pub remaining_credits: i32,
    pub profile: ProfileViewDto,
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        entitlement::{AdjustEntitlementDto, EntitlementDto, EntitlementSummaryDto},
    },
    server::{
        controller::util::get_user::{get_admin_from_session, get_user_from_session},
        error::Error,
        model::app::AppState,
        service::entitlement::EntitlementService,
    },
};

pub static ENTITLEMENT_TAG: &str = "entitlement";

/// Get the caller's credit balance and validity window
#[utoipa::path(
    get,
    path = "/api/entitlement/me",
    tag = ENTITLEMENT_TAG,
    responses(
        (status = 200, description = "Entitlement summary, null entitlement for users who never subscribed", body = EntitlementSummaryDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_entitlement(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let summary = EntitlementService::new(&state.db)
        .get_summary(user.id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Adjust a user's credits, validity or status
#[utoipa::path(
    post,
    path = "/api/admin/entitlements/{user_id}",
    tag = ENTITLEMENT_TAG,
    params(("user_id" = i32, Path, description = "Owner of the entitlement")),
    request_body = AdjustEntitlementDto,
    responses(
        (status = 200, description = "Adjusted entitlement", body = EntitlementDto),
        (status = 400, description = "Adjustment would violate the credit bounds", body = ErrorDto),
        (status = 403, description = "Caller is not an administrator or user has no entitlement", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_entitlement(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(adjustment): Json<AdjustEntitlementDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin_from_session(&state, &session).await?;

    let entitlement = EntitlementService::new(&state.db)
        .adjust(user_id, adjustment)
        .await?;

    tracing::info!(
        admin_id = %admin.id,
        user_id = %user_id,
        "Administrator adjusted entitlement"
    );

    Ok((StatusCode::OK, Json(entitlement)))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        entitlement::UnlockResultDto,
        profile::{ProfileListDto, ProfileViewDto},
    },
    server::{
        controller::util::get_user::{get_optional_user_from_session, get_user_from_session},
        error::Error,
        model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    /// Page size, clamped to 1..=100
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Get one profile, full or redacted depending on the caller's access
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Full or redacted profile", body = ProfileViewDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(profile_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user_from_session(&state, &session).await?;
    let is_admin = viewer
        .as_ref()
        .is_some_and(|user| state.admin.is_admin(user));

    let profile = ProfileService::new(&state.db, &state.media, state.photo_url_ttl)
        .resolve(profile_id, viewer.as_ref(), is_admin)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// List published profiles, each full or redacted depending on the caller's access
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "A page of profiles", body = ProfileListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user_from_session(&state, &session).await?;
    let is_admin = viewer
        .as_ref()
        .is_some_and(|user| state.admin.is_admin(user));

    let list = ProfileService::new(&state.db, &state.media, state.photo_url_ttl)
        .resolve_many(viewer.as_ref(), is_admin, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(list)))
}

/// Spend one credit to unlock a profile's protected fields
///
/// Unlocking an already-unlocked profile, or one the caller owns, spends nothing.
#[utoipa::path(
    post,
    path = "/api/profiles/{id}/unlock",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Unlock outcome with the full profile", body = UnlockResultDto),
        (status = 403, description = "No active subscription, or subscription expired or out of credits", body = ErrorDto),
        (status = 404, description = "Profile or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlock_profile(
    State(state): State<AppState>,
    session: Session,
    Path(profile_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_user_from_session(&state, &session).await?;
    let is_admin = state.admin.is_admin(&viewer);

    let result = ProfileService::new(&state.db, &state.media, state.photo_url_ttl)
        .unlock(profile_id, &viewer, is_admin)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

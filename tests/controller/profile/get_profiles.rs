//! Tests for the get_profiles endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use rishta::server::{
    controller::profile::{get_profiles, ListParams},
    model::session::user::SessionUserId,
};
use serde_json::Value;

use super::*;

/// Expect unlocked profiles in full and the rest redacted
#[tokio::test]
async fn mixes_projections_for_subscriber() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let unlocked = listed_profile(&test).await?;
    test.profile()
        .insert_profile(unlocked.owner_id, "RM1002")
        .await?;
    let viewer = test.user().insert_user("asha").await?;
    let entitlement = test
        .entitlement()
        .insert_active_entitlement(viewer.id, 30)
        .await?;
    test.entitlement()
        .insert_unlock(entitlement.id, unlocked.id)
        .await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_profiles(
        State(test.into_app_state()),
        test.session.clone(),
        Query(ListParams {
            page: 0,
            per_page: 20,
        }),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    let profiles = body["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 2);
    for profile in profiles {
        if profile["id"] == unlocked.id {
            assert_eq!(profile["projection"], "full");
        } else {
            assert_eq!(profile["projection"], "redacted");
            assert!(profile.get("contact_number").is_none());
        }
    }

    Ok(())
}

/// Expect an empty page past the end of the listing
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    listed_profile(&test).await?;

    let result = get_profiles(
        State(test.into_app_state()),
        test.session.clone(),
        Query(ListParams {
            page: 3,
            per_page: 20,
        }),
    )
    .await;

    let body: Value = read_json(respond(result)).await;
    assert!(body["profiles"].as_array().unwrap().is_empty());
    assert_eq!(body["page"], 3);

    Ok(())
}

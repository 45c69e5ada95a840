//! Tests for the get_profile endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use rishta::server::{controller::profile::get_profile, model::session::user::SessionUserId};
use serde_json::Value;

use super::*;

/// Expect an anonymous caller to receive the redacted projection without protected fields
#[tokio::test]
async fn anonymous_caller_gets_redacted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;

    let result = get_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["projection"], "redacted");
    assert_eq!(body["first_name"], "Meera");
    assert_eq!(body["location"], "Jaipur, Rajasthan");
    assert!(body.get("surname").is_none());
    assert!(body.get("contact_number").is_none());
    assert!(body.get("postal_address").is_none());
    assert!(body.get("photos").is_none());
    assert_eq!(body["photo"]["is_primary"], true);

    Ok(())
}

/// Expect a subscriber without an unlock to still receive the redacted projection
#[tokio::test]
async fn subscriber_without_unlock_gets_redacted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let viewer = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(viewer.id, 30)
        .await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    let body: Value = read_json(respond(result)).await;
    assert_eq!(body["projection"], "redacted");

    Ok(())
}

/// Expect an administrator to receive the full projection with every photo
#[tokio::test]
async fn admin_gets_full() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = get_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    let body: Value = read_json(respond(result)).await;
    assert_eq!(body["projection"], "full");
    assert_eq!(body["surname"], "Sharma");
    assert_eq!(body["photos"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 404 for an unknown profile
#[tokio::test]
async fn fails_for_unknown_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;

    let result = get_profile(State(test.into_app_state()), test.session.clone(), Path(7)).await;

    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

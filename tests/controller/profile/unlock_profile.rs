//! Tests for the unlock_profile endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::rishta_entitlement::EntitlementStatus;
use rishta::server::{
    controller::profile::{get_profile, unlock_profile},
    model::session::user::SessionUserId,
};
use serde_json::Value;

use super::*;

/// Expect one credit spent and the full profile returned, then full on re-read
#[tokio::test]
async fn unlock_spends_one_credit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let viewer = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(viewer.id, 30)
        .await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();
    let state = test.into_app_state();

    let result = unlock_profile(State(state.clone()), test.session.clone(), Path(profile.id)).await;
    let reread = get_profile(State(state), test.session.clone(), Path(profile.id)).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["already_unlocked"], false);
    assert_eq!(body["remaining_credits"], 29);
    assert_eq!(body["profile"]["projection"], "full");
    assert_eq!(body["profile"]["contact_number"], "+91 98290 00000");
    let reread: Value = read_json(respond(reread)).await;
    assert_eq!(reread["projection"], "full");

    Ok(())
}

/// Expect a repeated unlock to spend nothing
#[tokio::test]
async fn repeated_unlock_is_free() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let viewer = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(viewer.id, 30)
        .await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();
    let state = test.into_app_state();

    let first = unlock_profile(State(state.clone()), test.session.clone(), Path(profile.id)).await;
    let second = unlock_profile(State(state), test.session.clone(), Path(profile.id)).await;

    assert_eq!(respond(first).status(), StatusCode::OK);
    let body: Value = read_json(respond(second)).await;
    assert_eq!(body["already_unlocked"], true);
    assert_eq!(body["remaining_credits"], 29);

    Ok(())
}

/// Expect 403 without a subscription
#[tokio::test]
async fn fails_without_subscription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let viewer = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = unlock_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 and an untouched balance for an exhausted subscription
#[tokio::test]
async fn fails_when_out_of_credits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;
    let viewer = test.user().insert_user("asha").await?;
    let now = chrono::Utc::now().naive_utc();
    let entitlement = test
        .entitlement()
        .insert_entitlement(
            viewer.id,
            0,
            30,
            now - chrono::Duration::days(10),
            now + chrono::Duration::days(80),
            EntitlementStatus::Active,
        )
        .await?;
    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = unlock_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);
    let reloaded = test.entitlement().get(entitlement.id).await?.unwrap();
    assert_eq!(reloaded.remaining_credits, 0);
    assert_eq!(reloaded.consumed_count, entitlement.consumed_count);

    Ok(())
}

/// Expect 404 for an anonymous caller
#[tokio::test]
async fn fails_for_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let profile = listed_profile(&test).await?;

    let result = unlock_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Path(profile.id),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

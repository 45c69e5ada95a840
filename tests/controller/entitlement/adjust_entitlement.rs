//! Tests for the adjust_entitlement endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rishta::{
    model::entitlement::AdjustEntitlementDto,
    server::{controller::entitlement::adjust_entitlement, model::session::user::SessionUserId},
};
use serde_json::Value;

use super::*;

/// Expect 200 and the adjusted balance when an administrator grants credits
#[tokio::test]
async fn admin_adjusts_credits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(member.id, 30)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = adjust_entitlement(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
        Json(AdjustEntitlementDto {
            max_credits: Some(40),
            remaining_credits: Some(40),
            ..Default::default()
        }),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["remaining_credits"], 40);
    assert_eq!(body["max_credits"], 40);

    Ok(())
}

/// Expect 403 when a non-administrator attempts an adjustment
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let member = test.user().insert_user("asha").await?;
    let entitlement = test
        .entitlement()
        .insert_active_entitlement(member.id, 30)
        .await?;
    SessionUserId::insert(&test.session, member.id).await.unwrap();

    let result = adjust_entitlement(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
        Json(AdjustEntitlementDto {
            remaining_credits: Some(0),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);
    let entitlement = test.entitlement().get(entitlement.id).await?.unwrap();
    assert_eq!(entitlement.remaining_credits, 30);

    Ok(())
}

/// Expect 400 when the adjustment would leave more remaining credits than the maximum
#[tokio::test]
async fn rejects_out_of_bounds_adjustment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(member.id, 30)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = adjust_entitlement(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
        Json(AdjustEntitlementDto {
            remaining_credits: Some(31),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 with the no-subscription message for a user without an entitlement
#[tokio::test]
async fn fails_for_user_without_entitlement() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = adjust_entitlement(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
        Json(AdjustEntitlementDto::default()),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

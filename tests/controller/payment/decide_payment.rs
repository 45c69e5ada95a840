//! Tests for the decide_payment endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::rishta_payment_request::PaymentPlan;
use rishta::{
    model::payment::{DecidePaymentDto, DecisionDto},
    server::{controller::payment::decide_payment, model::session::user::SessionUserId},
};
use serde_json::Value;

use super::*;

fn approve() -> DecidePaymentDto {
    DecidePaymentDto {
        decision: DecisionDto::Approve,
        notes: Some("UTR verified".to_string()),
        override_credits: None,
    }
}

/// Expect approval to create the requester's entitlement with the plan's credits
#[tokio::test]
async fn approval_grants_plan_credits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    let request = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Basic)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = decide_payment(
        State(test.into_app_state()),
        test.session.clone(),
        Path(request.id),
        Json(approve()),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["request"]["status"], "approved");
    assert_eq!(body["request"]["reviewer_id"], admin.id);
    assert_eq!(body["entitlement"]["remaining_credits"], 30);
    assert_eq!(body["entitlement"]["status"], "active");

    Ok(())
}

/// Expect 409 when the request was already decided
#[tokio::test]
async fn second_decision_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    let request = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Basic)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();
    let state = test.into_app_state();

    let first = decide_payment(
        State(state.clone()),
        test.session.clone(),
        Path(request.id),
        Json(approve()),
    )
    .await;
    let second = decide_payment(
        State(state),
        test.session.clone(),
        Path(request.id),
        Json(approve()),
    )
    .await;

    assert_eq!(respond(first).status(), StatusCode::OK);
    assert_eq!(respond(second).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 for a non-positive override on approval
#[tokio::test]
async fn rejects_non_positive_override() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    let request = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Basic)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = decide_payment(
        State(test.into_app_state()),
        test.session.clone(),
        Path(request.id),
        Json(DecidePaymentDto {
            override_credits: Some(0),
            ..approve()
        }),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an unknown payment request
#[tokio::test]
async fn fails_for_unknown_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = decide_payment(
        State(test.into_app_state()),
        test.session.clone(),
        Path(99),
        Json(approve()),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 and an untouched request when a non-administrator decides
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let member = test.user().insert_user("asha").await?;
    let request = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Basic)
        .await?;
    SessionUserId::insert(&test.session, member.id).await.unwrap();

    let result = decide_payment(
        State(test.into_app_state()),
        test.session.clone(),
        Path(request.id),
        Json(approve()),
    )
    .await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);
    assert!(test
        .entitlement()
        .get(1)
        .await?
        .is_none());

    Ok(())
}

//! Tests for the get_pending_payments endpoint.

use axum::{extract::State, http::StatusCode};
use entity::rishta_payment_request::{PaymentPlan, PaymentStatus};
use rishta::server::{
    controller::payment::get_pending_payments, model::session::user::SessionUserId,
};
use serde_json::Value;

use super::*;

/// Expect only pending requests, each with a proof link
#[tokio::test]
async fn admin_lists_pending_with_proof_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_USERNAME).await?;
    let member = test.user().insert_user("asha").await?;
    let pending = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Basic)
        .await?;
    test.payment()
        .insert_request(member.id, PaymentPlan::Premium, PaymentStatus::Rejected)
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = get_pending_payments(State(test.into_app_state()), test.session.clone()).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["request"]["id"], pending.id);
    assert!(entries[0]["proof_url"]
        .as_str()
        .unwrap()
        .starts_with("data:"));

    Ok(())
}

/// Expect 403 for a caller outside the admin allow-list
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let member = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, member.id).await.unwrap();

    let result = get_pending_payments(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(respond(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect an administrator matched by email alone to be accepted
#[tokio::test]
async fn accepts_admin_by_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let admin = test
        .user()
        .insert_user_with_email("reviewer", &TEST_ADMIN_EMAIL.to_uppercase())
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = get_pending_payments(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(respond(result).status(), StatusCode::OK);

    Ok(())
}

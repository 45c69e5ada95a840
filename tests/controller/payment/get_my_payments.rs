//! Tests for the get_my_payments endpoint.

use axum::{extract::State, http::StatusCode};
use entity::rishta_payment_request::PaymentPlan;
use rishta::server::{controller::payment::get_my_payments, model::session::user::SessionUserId};
use serde_json::Value;

use super::*;

/// Expect only the caller's own requests
#[tokio::test]
async fn lists_only_callers_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let member = test.user().insert_user("asha").await?;
    let other = test.user().insert_user("meera").await?;
    let own = test
        .payment()
        .insert_pending_request(member.id, PaymentPlan::Standard)
        .await?;
    test.payment()
        .insert_pending_request(other.id, PaymentPlan::Basic)
        .await?;
    SessionUserId::insert(&test.session, member.id).await.unwrap();

    let result = get_my_payments(State(test.into_app_state()), test.session.clone()).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    let requests = body.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["id"], own.id);
    assert_eq!(requests[0]["plan"], "standard");

    Ok(())
}

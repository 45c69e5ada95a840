//! Tests for the get_my_entitlement endpoint.

use axum::{extract::State, http::StatusCode};
use rishta::server::{
    controller::entitlement::get_my_entitlement, model::session::user::SessionUserId,
};
use serde_json::Value;

use super::*;

/// Expect 200 with the caller's balance
#[tokio::test]
async fn returns_balance_of_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let user = test.user().insert_user("asha").await?;
    test.entitlement()
        .insert_active_entitlement(user.id, 30)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_my_entitlement(State(test.into_app_state()), test.session.clone()).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["entitlement"]["remaining_credits"], 30);
    assert_eq!(body["entitlement"]["status"], "active");
    assert_eq!(body["entitlement"]["is_usable"], true);

    Ok(())
}

/// Expect 200 with a null entitlement for a user who never subscribed
#[tokio::test]
async fn returns_null_for_user_without_entitlement() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let user = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_my_entitlement(State(test.into_app_state()), test.session.clone()).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert!(body["entitlement"].is_null());

    Ok(())
}

/// Expect 404 when no user is in the session
#[tokio::test]
async fn fails_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;

    let result = get_my_entitlement(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 and a cleared session when the session user no longer exists
#[tokio::test]
async fn clears_session_of_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_my_entitlement(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

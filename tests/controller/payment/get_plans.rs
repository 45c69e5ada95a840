//! Tests for the get_plans endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use rishta::server::controller::payment::get_plans;
use serde_json::Value;

use super::*;

/// Expect the three plans with their credit counts
#[tokio::test]
async fn lists_plan_table() -> Result<(), TestError> {
    let resp = get_plans().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    let plans = body.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["id"], "basic");
    assert_eq!(plans[0]["credits_granted"], 30);

    Ok(())
}

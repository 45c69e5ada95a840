//! Tests for the assembled router and its OpenAPI document.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rishta::server::router::routes;
use rishta_test_utils::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

use crate::util::{read_json, TestContextExt};

/// Expect the public plan table to be served through the router
#[tokio::test]
async fn serves_plans() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(Request::get("/api/plans").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect every API route to be documented in the OpenAPI document
#[tokio::test]
async fn documents_api_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = read_json(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/plans",
        "/api/payments",
        "/api/payments/me",
        "/api/payments/pending",
        "/api/payments/{id}/decide",
        "/api/entitlement/me",
        "/api/admin/entitlements/{user_id}",
        "/api/profiles",
        "/api/profiles/{id}",
        "/api/profiles/{id}/unlock",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    Ok(())
}

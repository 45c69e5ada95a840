//! Tests for the submit_payment endpoint.

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, State},
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use rishta::server::{controller::payment::submit_payment, model::session::user::SessionUserId};
use serde_json::Value;

use super::*;

const BOUNDARY: &str = "rishta-test-boundary";

/// Builds a multipart extractor from text fields and an optional `proof` file
async fn multipart(fields: &[(&str, &str)], proof: Option<&[u8]>) -> Multipart {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some(proof) = proof {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"proof\"; filename=\"proof.png\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(proof);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/payments")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

/// Expect 201 with a pending request when every field is present
#[tokio::test]
async fn creates_pending_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let user = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let form = multipart(
        &[("plan", "basic"), ("reference_code", "UTR123456")],
        Some(TEST_IMAGE_BYTES),
    )
    .await;
    let result = submit_payment(State(test.into_app_state()), test.session.clone(), form).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = read_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["plan"], "basic");
    assert_eq!(body["reference_code"], "UTR123456");
    assert_eq!(body["requester_id"], user.id);

    Ok(())
}

/// Expect 400 when the proof file is missing
#[tokio::test]
async fn fails_without_proof() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let user = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let form = multipart(&[("plan", "basic"), ("reference_code", "UTR1")], None).await;
    let result = submit_payment(State(test.into_app_state()), test.session.clone(), form).await;

    assert_eq!(respond(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a plan outside the plan table
#[tokio::test]
async fn fails_for_unknown_plan() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;
    let user = test.user().insert_user("asha").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let form = multipart(
        &[("plan", "platinum"), ("reference_code", "UTR1")],
        Some(TEST_IMAGE_BYTES),
    )
    .await;
    let result = submit_payment(State(test.into_app_state()), test.session.clone(), form).await;

    assert_eq!(respond(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an anonymous caller
#[tokio::test]
async fn fails_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_entitlement_tables().build().await?;

    let form = multipart(&[("plan", "basic")], None).await;
    let result = submit_payment(State(test.into_app_state()), test.session.clone(), form).await;

    assert_eq!(respond(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

//! Test utilities for building the application state and reading responses

use std::time::Duration;

use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use rishta::server::{
    error::Error, model::app::AppState, service::admin::AdminGate, storage::MediaStore,
};
use rishta_test_utils::{
    constant::{TEST_ADMIN_EMAIL, TEST_ADMIN_USERNAME, TEST_PHOTO_URL_TTL_SECS},
    TestContext,
};
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState backed by the test database and
/// in-memory object store
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            media: MediaStore::Memory(self.media.clone()),
            admin: AdminGate::new([TEST_ADMIN_USERNAME], [TEST_ADMIN_EMAIL]),
            photo_url_ttl: Duration::from_secs(TEST_PHOTO_URL_TTL_SECS),
        }
    }
}

/// Reads a JSON response body into `T`
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Converts a handler result into the response the client would receive
pub fn respond<R: IntoResponse>(result: Result<R, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

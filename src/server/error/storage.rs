use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Media storage unavailable: {0}")]
    Unavailable(#[from] object_store::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Storage is temporarily unavailable, please try again later.",
        )
    }
}

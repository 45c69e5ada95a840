use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile ID {0:?} not found or not visible")]
    NotFound(i32),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Profile not found"),
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment request ID {0:?} not found")]
    NotFound(i32),
    #[error("Unknown subscription plan {0:?}")]
    InvalidPlan(String),
    #[error("Override credits must be a positive integer, got {0}")]
    InvalidOverrideCredits(i32),
    #[error("Payment request ID {0:?} has already been processed")]
    AlreadyProcessed(i32),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Payment request not found"),
            Self::AlreadyProcessed(_) => error_response(
                StatusCode::CONFLICT,
                "This payment request has already been processed",
            ),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}

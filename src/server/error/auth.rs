use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} attempted an administrator-only action")]
    AdminRequired(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::AdminRequired(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Administrator access required")
            }
        }
    }
}

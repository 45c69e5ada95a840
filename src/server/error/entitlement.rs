use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Business-rule denials and faults of the entitlement record.
///
/// `NoEntitlement` and `ExpiredOrExhausted` carry distinct client messages: the former routes
/// the client to a first purchase, the latter to a renewal.
#[derive(Error, Debug)]
pub enum EntitlementError {
    #[error("User ID {0:?} has no entitlement record")]
    NoEntitlement(i32),
    #[error("Entitlement for user ID {0:?} is expired, inactive or out of credits")]
    ExpiredOrExhausted(i32),
    #[error("Conditional credit update for entitlement ID {0:?} lost a race with a concurrent writer")]
    UpdateConflict(i32),
    #[error("Entitlement for user ID {0:?} was created by a concurrent writer")]
    CreateConflict(i32),
    #[error("Invalid credit adjustment: {0}")]
    InvalidCreditAdjustment(String),
}

impl IntoResponse for EntitlementError {
    fn into_response(self) -> Response {
        match self {
            Self::NoEntitlement(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have a subscription yet, purchase a plan to view full profiles.",
                )
            }
            Self::ExpiredOrExhausted(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "Your subscription has expired or has no credits left, upgrade your plan to view more profiles.",
                )
            }
            Self::InvalidCreditAdjustment(ref reason) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, reason.clone())
            }
            Self::UpdateConflict(_) | Self::CreateConflict(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}

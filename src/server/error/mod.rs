//! Error types for the Rishta server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, entitlements, payments, profiles, media storage).
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod entitlement;
pub mod payment;
pub mod profile;
pub mod retry;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, entitlement::EntitlementError,
        payment::PaymentError, profile::ProfileError, storage::StorageError,
    },
};

/// Main error type for the Rishta server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, user validation, admin allow-list)
/// - Business-rule denials (entitlement, payment workflow, profile lookup)
/// - Dependency faults (media storage)
/// - External library errors (database, sessions, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, user lookup, admin requirement).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Entitlement denial or credit adjustment error.
    #[error(transparent)]
    EntitlementError(#[from] EntitlementError),
    /// Payment request workflow error.
    #[error(transparent)]
    PaymentError(#[from] PaymentError),
    /// Profile lookup error.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Media storage error (photo signing, proof upload).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Rishta's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// Business-rule denials are mapped by their domain error type, everything else is treated
/// as an internal server error (500) and logged.
///
/// # Returns
/// - 400 Bad Request - Invalid plan, override credits, credit adjustment or upload
/// - 403 Forbidden - Missing/exhausted entitlement, admin required
/// - 404 Not Found - Missing user, profile or payment request
/// - 409 Conflict - Payment request already processed
/// - 503 Service Unavailable - Media storage unavailable
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EntitlementError(err) => err.into_response(),
            Self::PaymentError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and client-facing message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

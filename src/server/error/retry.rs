use sea_orm::DbErr;

use super::{entitlement::EntitlementError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient faults)
    Retry,
    /// Failed permanently (bad request, business-rule denial)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Record not found/inserted/updated
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Lost a conditional write to a concurrent writer, the next attempt re-reads the record
            Self::EntitlementError(EntitlementError::UpdateConflict(_))
            | Self::EntitlementError(EntitlementError::CreateConflict(_)) => {
                ErrorRetryStrategy::Retry
            }

            // Denials and invalid adjustments won't change on retry
            Self::EntitlementError(_) => ErrorRetryStrategy::Fail,

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Object storage may recover, but uploads are not replayable from here
            Self::StorageError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::PaymentError(_) => ErrorRetryStrategy::Fail,
            Self::ProfileError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

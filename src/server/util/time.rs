//! Time and date calculation utilities.
//!
//! Validity windows of entitlement records are measured in calendar months and are inclusive
//! on both ends. Renewal either stacks onto the remaining window or restarts it from now,
//! depending on whether the window has already lapsed.

use chrono::{Months, NaiveDate, NaiveDateTime};

use crate::server::error::Error;

/// Length of the validity window granted by one approved payment
pub const VALIDITY_MONTHS: u32 = 3;

/// Validity window after a renewal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenewedValidity {
    pub valid_to: NaiveDateTime,
    /// The window had lapsed, the record must be forced back to active
    pub reactivate: bool,
}

/// Adds one validity period to `from`, clamping to the end of shorter months.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - `from` plus [`VALIDITY_MONTHS`] calendar months
/// - `Err(Error::InternalError)` - The result is outside chrono's representable range
pub fn validity_end(from: NaiveDateTime) -> Result<NaiveDateTime, Error> {
    from.checked_add_months(Months::new(VALIDITY_MONTHS))
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to add {} months to validity timestamp {}",
                VALIDITY_MONTHS, from
            ))
        })
}

/// Computes the validity window of an existing record receiving a new payment.
///
/// # Logic
/// - `current_valid_to` already passed: the window restarts at `now` and the record is reactivated
/// - otherwise: one period is stacked onto the current end, status is left alone
///
/// # Example
/// ```ignore
/// // Renewing on 2025-01-10 a record valid until 2025-02-01 yields 2025-05-01
/// // Renewing on 2025-03-10 the same record yields 2025-06-10 and reactivates it
/// ```
pub fn renewed_validity(
    current_valid_to: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<RenewedValidity, Error> {
    if current_valid_to < now {
        Ok(RenewedValidity {
            valid_to: validity_end(now)?,
            reactivate: true,
        })
    } else {
        Ok(RenewedValidity {
            valid_to: validity_end(current_valid_to)?,
            reactivate: false,
        })
    }
}

/// Whole years between `date_of_birth` and `today`, 0 for birth dates in the future
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today
        .years_since(date_of_birth)
        .map(|years| years as i32)
        .unwrap_or(0)
}

//! Entitlement service layer.
//!
//! An entitlement is a viewer's balance of profile-unlock credits and the window it can be
//! spent in. This module exposes the read-only summary, admin credit adjustment and the
//! expiry sweep. The concurrency-sensitive credit consumption lives in [`unlock`].

pub mod unlock;

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use entity::rishta_entitlement::EntitlementStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::entitlement::{
        AdjustEntitlementDto, EntitlementDto, EntitlementStatusDto, EntitlementSummaryDto,
    },
    server::{
        data::entitlement::{EntitlementAdjustment, EntitlementRepository},
        error::{entitlement::EntitlementError, Error},
        service::retry::RetryContext,
    },
};

/// Whether `entitlement` can pay for an unlock at `now`
///
/// Requires an active status, at least one remaining credit and `now` inside the inclusive
/// validity window.
pub fn is_usable(entitlement: &entity::rishta_entitlement::Model, now: NaiveDateTime) -> bool {
    entitlement.status == EntitlementStatus::Active
        && entitlement.remaining_credits > 0
        && entitlement.valid_from <= now
        && now <= entitlement.valid_to
}

/// Converts an entitlement record into its API representation as of `now`
pub fn entitlement_dto(
    entitlement: entity::rishta_entitlement::Model,
    now: NaiveDateTime,
) -> EntitlementDto {
    let is_usable = is_usable(&entitlement, now);

    EntitlementDto {
        access_token: entitlement.access_token,
        max_credits: entitlement.max_credits,
        remaining_credits: entitlement.remaining_credits,
        consumed_count: entitlement.consumed_count,
        valid_from: entitlement.valid_from,
        valid_to: entitlement.valid_to,
        status: entitlement.status.into(),
        is_usable,
    }
}

impl From<EntitlementStatus> for EntitlementStatusDto {
    fn from(status: EntitlementStatus) -> Self {
        match status {
            EntitlementStatus::Pending => Self::Pending,
            EntitlementStatus::Active => Self::Active,
            EntitlementStatus::Expired => Self::Expired,
            EntitlementStatus::Revoked => Self::Revoked,
        }
    }
}

impl From<EntitlementStatusDto> for EntitlementStatus {
    fn from(status: EntitlementStatusDto) -> Self {
        match status {
            EntitlementStatusDto::Pending => Self::Pending,
            EntitlementStatusDto::Active => Self::Active,
            EntitlementStatusDto::Expired => Self::Expired,
            EntitlementStatusDto::Revoked => Self::Revoked,
        }
    }
}

/// Service for reading and administering entitlement records.
pub struct EntitlementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntitlementService<'a> {
    /// Creates a new instance of EntitlementService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the entitlement summary of a user.
    ///
    /// # Returns
    /// - `Ok(EntitlementSummaryDto)` - Summary, with `entitlement: None` if the user never subscribed
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_summary(&self, owner_id: i32) -> Result<EntitlementSummaryDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("entitlement summary of user ID {}", owner_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let entitlement_repo = EntitlementRepository::new(&db);
                let now = Utc::now().naive_utc();

                let entitlement = entitlement_repo
                    .get_by_owner(owner_id)
                    .await?
                    .map(|entitlement| entitlement_dto(entitlement, now));

                Ok(EntitlementSummaryDto { entitlement })
            })
        })
        .await
    }

    /// Overwrites credits, validity end or status of a user's entitlement.
    ///
    /// Fields omitted from `adjustment` keep their current value. The resulting record must
    /// satisfy `0 <= remaining_credits <= max_credits` and end no earlier than it starts.
    ///
    /// # Returns
    /// - `Ok(EntitlementDto)` - The adjusted record
    /// - `Err(Error::EntitlementError(EntitlementError::NoEntitlement))` - User has no entitlement
    /// - `Err(Error::EntitlementError(EntitlementError::InvalidCreditAdjustment))` - Result would violate the credit bounds
    /// - `Err(Error::EntitlementError(EntitlementError::UpdateConflict))` - Record kept changing under every retry
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn adjust(
        &self,
        owner_id: i32,
        adjustment: AdjustEntitlementDto,
    ) -> Result<EntitlementDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("entitlement adjustment of user ID {}", owner_id), |_| {
            let db = db.clone();
            let adjustment = adjustment.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let entitlement_repo = EntitlementRepository::new(&txn);
                let now = Utc::now().naive_utc();

                let entitlement = entitlement_repo
                    .get_by_owner_for_update(owner_id)
                    .await?
                    .ok_or(EntitlementError::NoEntitlement(owner_id))?;

                let max_credits = adjustment.max_credits.unwrap_or(entitlement.max_credits);
                let remaining_credits = adjustment
                    .remaining_credits
                    .unwrap_or(entitlement.remaining_credits);
                let valid_to = adjustment.valid_to.unwrap_or(entitlement.valid_to);

                validate_adjustment(max_credits, remaining_credits)?;
                if valid_to < entitlement.valid_from {
                    return Err(EntitlementError::InvalidCreditAdjustment(format!(
                        "validTo {} precedes validFrom {}",
                        valid_to, entitlement.valid_from
                    ))
                    .into());
                }

                let adjusted = entitlement_repo
                    .apply_adjustment(
                        &entitlement,
                        EntitlementAdjustment {
                            max_credits: adjustment.max_credits,
                            remaining_credits: adjustment.remaining_credits,
                            valid_to: adjustment.valid_to,
                            status: adjustment.status.map(EntitlementStatus::from),
                        },
                        now,
                    )
                    .await?
                    .ok_or(EntitlementError::UpdateConflict(entitlement.id))?;

                txn.commit().await?;

                tracing::info!(
                    user_id = %owner_id,
                    max_credits = %adjusted.max_credits,
                    remaining_credits = %adjusted.remaining_credits,
                    "Adjusted entitlement"
                );

                Ok(entitlement_dto(adjusted, now))
            })
        })
        .await
    }

    /// Marks every active entitlement past its validity window as expired.
    ///
    /// Credits and unlocked profiles are left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entitlements expired
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn expire_lapsed(&self, now: NaiveDateTime) -> Result<u64, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("expiry sweep of lapsed entitlements", |_| {
            let db = db.clone();

            Box::pin(async move {
                let entitlement_repo = EntitlementRepository::new(&db);

                Ok(entitlement_repo.expire_lapsed(now).await?)
            })
        })
        .await
    }
}

/// Checks the `0 <= remaining <= max` bounds of an adjusted record
fn validate_adjustment(max_credits: i32, remaining_credits: i32) -> Result<(), Error> {
    if max_credits < 0 {
        return Err(EntitlementError::InvalidCreditAdjustment(format!(
            "maxCredits must not be negative, got {}",
            max_credits
        ))
        .into());
    }
    if remaining_credits < 0 {
        return Err(EntitlementError::InvalidCreditAdjustment(format!(
            "remainingCredits must not be negative, got {}",
            remaining_credits
        ))
        .into());
    }
    if remaining_credits > max_credits {
        return Err(EntitlementError::InvalidCreditAdjustment(format!(
            "remainingCredits ({}) must not exceed maxCredits ({})",
            remaining_credits, max_credits
        ))
        .into());
    }

    Ok(())
}

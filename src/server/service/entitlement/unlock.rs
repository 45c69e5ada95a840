//! Atomic consumption of one entitlement credit per newly unlocked profile.
//!
//! An unlock runs in a single transaction: the credit decrement is a conditional UPDATE
//! guarded by the usability predicate, and set membership is an insert that ignores an
//! existing `(entitlement_id, profile_id)` row. Either both writes commit or neither does.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::entitlement::EntitlementRepository,
    error::{entitlement::EntitlementError, Error},
    service::{entitlement::is_usable, retry::RetryContext},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockOutcome {
    /// The profile was a member of the unlocked set before this call, no credit was spent
    pub already_unlocked: bool,
    pub remaining_credits: i32,
}

/// Result of one unlock attempt inside its transaction
#[derive(Debug)]
pub(super) enum UnlockStep {
    /// Credit spent and membership recorded, commit
    Recorded(UnlockOutcome),
    /// Profile was already a member when checked, nothing written
    AlreadyMember(UnlockOutcome),
    /// A concurrent unlock of the same profile inserted the membership first, roll back
    LostRace,
}

pub struct UnlockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnlockService<'a> {
    /// Creates a new instance of UnlockService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Spends one credit of `viewer_id` on `profile_id` unless the profile is already unlocked.
    ///
    /// Callers are responsible for ensuring the profile exists and that the viewer is neither
    /// its owner nor an administrator.
    ///
    /// # Returns
    /// - `Ok(UnlockOutcome)` - `already_unlocked` tells whether a credit was spent
    /// - `Err(Error::EntitlementError(EntitlementError::NoEntitlement))` - Viewer never subscribed
    /// - `Err(Error::EntitlementError(EntitlementError::ExpiredOrExhausted))` - Entitlement not active, out of credits or outside its window
    /// - `Err(Error::EntitlementError(EntitlementError::UpdateConflict))` - Lost every retry to concurrent writers
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn unlock(&self, viewer_id: i32, profile_id: i32) -> Result<UnlockOutcome, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("unlock of profile ID {} by user ID {}", profile_id, viewer_id),
            |_| {
                let db = db.clone();

                Box::pin(async move {
                    let now = Utc::now().naive_utc();
                    let txn = db.begin().await?;

                    match consume_and_record(&txn, viewer_id, profile_id, now).await? {
                        UnlockStep::Recorded(outcome) => {
                            txn.commit().await?;

                            tracing::info!(
                                user_id = %viewer_id,
                                profile_id = %profile_id,
                                remaining_credits = %outcome.remaining_credits,
                                "Unlocked profile"
                            );

                            Ok(outcome)
                        }
                        UnlockStep::AlreadyMember(outcome) => {
                            txn.rollback().await?;

                            Ok(outcome)
                        }
                        UnlockStep::LostRace => {
                            txn.rollback().await?;

                            let entitlement = EntitlementRepository::new(&db)
                                .get_by_owner(viewer_id)
                                .await?
                                .ok_or(EntitlementError::NoEntitlement(viewer_id))?;

                            Ok(UnlockOutcome {
                                already_unlocked: true,
                                remaining_credits: entitlement.remaining_credits,
                            })
                        }
                    }
                })
            },
        )
        .await
    }
}

/// Runs one unlock attempt against `db`, which must be a transaction
async fn consume_and_record<C: ConnectionTrait>(
    db: &C,
    viewer_id: i32,
    profile_id: i32,
    now: NaiveDateTime,
) -> Result<UnlockStep, Error> {
    let entitlement_repo = EntitlementRepository::new(db);

    let entitlement = entitlement_repo
        .get_by_owner(viewer_id)
        .await?
        .ok_or(EntitlementError::NoEntitlement(viewer_id))?;

    if !is_usable(&entitlement, now) {
        return Err(EntitlementError::ExpiredOrExhausted(viewer_id).into());
    }

    if entitlement_repo
        .is_unlocked(entitlement.id, profile_id)
        .await?
    {
        return Ok(UnlockStep::AlreadyMember(UnlockOutcome {
            already_unlocked: true,
            remaining_credits: entitlement.remaining_credits,
        }));
    }

    spend_and_record(db, &entitlement, viewer_id, profile_id, now).await
}

/// Spends a credit of `entitlement` on `profile_id` and records the membership
///
/// `entitlement` is the copy read before the membership check. Both writes are conditional,
/// so a stale copy yields an error or [`UnlockStep::LostRace`] rather than an overspend.
pub(super) async fn spend_and_record<C: ConnectionTrait>(
    db: &C,
    entitlement: &entity::rishta_entitlement::Model,
    viewer_id: i32,
    profile_id: i32,
    now: NaiveDateTime,
) -> Result<UnlockStep, Error> {
    let entitlement_repo = EntitlementRepository::new(db);

    if !entitlement_repo.consume_credit(entitlement.id, now).await? {
        // The row changed between the read and the conditional update
        let current = entitlement_repo
            .get_by_id(entitlement.id)
            .await?
            .ok_or(EntitlementError::NoEntitlement(viewer_id))?;

        if is_usable(&current, now) {
            return Err(EntitlementError::UpdateConflict(entitlement.id).into());
        }

        return Err(EntitlementError::ExpiredOrExhausted(viewer_id).into());
    }

    if !entitlement_repo
        .insert_unlock(entitlement.id, profile_id, now)
        .await?
    {
        return Ok(UnlockStep::LostRace);
    }

    let updated = entitlement_repo
        .get_by_id(entitlement.id)
        .await?
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Entitlement ID {} disappeared inside its unlock transaction",
                entitlement.id
            ))
        })?;

    Ok(UnlockStep::Recorded(UnlockOutcome {
        already_unlocked: false,
        remaining_credits: updated.remaining_credits,
    }))
}

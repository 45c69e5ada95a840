use std::collections::HashSet;

use chrono::NaiveDateTime;
use entity::rishta_entitlement::EntitlementStatus;
use sea_orm::{
    sea_query::{Expr, OnConflict, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

/// Absolute values applied by [`EntitlementRepository::apply_adjustment`]
#[derive(Clone, Debug, Default)]
pub struct EntitlementAdjustment {
    pub max_credits: Option<i32>,
    pub remaining_credits: Option<i32>,
    pub valid_to: Option<NaiveDateTime>,
    pub status: Option<EntitlementStatus>,
}

pub struct EntitlementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EntitlementRepository<'a, C> {
    /// Creates a new instance of [`EntitlementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active entitlement granting `credits` over the provided window
    pub async fn create(
        &self,
        owner_id: i32,
        access_token: String,
        credits: i32,
        valid_from: NaiveDateTime,
        valid_to: NaiveDateTime,
    ) -> Result<entity::rishta_entitlement::Model, DbErr> {
        let entitlement = entity::rishta_entitlement::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            access_token: ActiveValue::Set(access_token),
            max_credits: ActiveValue::Set(credits),
            remaining_credits: ActiveValue::Set(credits),
            consumed_count: ActiveValue::Set(0),
            valid_from: ActiveValue::Set(valid_from),
            valid_to: ActiveValue::Set(valid_to),
            status: ActiveValue::Set(EntitlementStatus::Active),
            created_at: ActiveValue::Set(valid_from),
            updated_at: ActiveValue::Set(valid_from),
            ..Default::default()
        };

        entitlement.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        entitlement_id: i32,
    ) -> Result<Option<entity::rishta_entitlement::Model>, DbErr> {
        entity::prelude::RishtaEntitlement::find_by_id(entitlement_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::rishta_entitlement::Model>, DbErr> {
        entity::prelude::RishtaEntitlement::find()
            .filter(entity::rishta_entitlement::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Same as [`Self::get_by_owner`] but locks the row until the surrounding transaction ends
    pub async fn get_by_owner_for_update(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::rishta_entitlement::Model>, DbErr> {
        entity::prelude::RishtaEntitlement::find()
            .filter(entity::rishta_entitlement::Column::OwnerId.eq(owner_id))
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Spends one credit if the entitlement is still usable at `now`
    ///
    /// The usability predicate is part of the UPDATE itself so two callers racing for the
    /// last credit cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - One credit was consumed
    /// - `Ok(false)` - The entitlement was no longer usable when the update ran
    pub async fn consume_credit(
        &self,
        entitlement_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        use entity::rishta_entitlement::Column;

        let result = entity::prelude::RishtaEntitlement::update_many()
            .col_expr(Column::RemainingCredits, offset(Column::RemainingCredits, -1))
            .col_expr(Column::ConsumedCount, offset(Column::ConsumedCount, 1))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(entitlement_id))
            .filter(Column::RemainingCredits.gt(0))
            .filter(Column::Status.eq(EntitlementStatus::Active))
            .filter(Column::ValidFrom.lte(now))
            .filter(Column::ValidTo.gte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds `profile_id` to the entitlement's unlocked set
    ///
    /// # Returns
    /// - `Ok(true)` - The profile was newly added
    /// - `Ok(false)` - The profile was already a member
    pub async fn insert_unlock(
        &self,
        entitlement_id: i32,
        profile_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        use entity::rishta_entitlement_unlock::Column;

        let unlock = entity::rishta_entitlement_unlock::ActiveModel {
            entitlement_id: ActiveValue::Set(entitlement_id),
            profile_id: ActiveValue::Set(profile_id),
            created_at: ActiveValue::Set(now),
        };

        let inserted = entity::prelude::RishtaEntitlementUnlock::insert(unlock)
            .on_conflict(
                OnConflict::columns([Column::EntitlementId, Column::ProfileId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted == 1)
    }

    pub async fn is_unlocked(&self, entitlement_id: i32, profile_id: i32) -> Result<bool, DbErr> {
        let unlock =
            entity::prelude::RishtaEntitlementUnlock::find_by_id((entitlement_id, profile_id))
                .one(self.db)
                .await?;

        Ok(unlock.is_some())
    }

    /// Returns which of `profile_ids` belong to the unlocked set of the entitlement owned by `owner_id`
    pub async fn unlocked_among(
        &self,
        owner_id: i32,
        profile_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        use entity::rishta_entitlement_unlock::Column;

        if profile_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let unlocked: Vec<i32> = entity::prelude::RishtaEntitlementUnlock::find()
            .select_only()
            .column(Column::ProfileId)
            .inner_join(entity::prelude::RishtaEntitlement)
            .filter(entity::rishta_entitlement::Column::OwnerId.eq(owner_id))
            .filter(Column::ProfileId.is_in(profile_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(unlocked.into_iter().collect())
    }

    /// Adds `credits` to both the remaining and maximum credits and moves the validity end
    ///
    /// `renewed_from` is the copy `valid_to` was computed from. The update only applies while
    /// the record still has that validity end and status, so two top-ups computed from the same
    /// copy cannot both land. When `reactivate` is set the status is forced back to active.
    ///
    /// # Returns
    /// - `Ok(true)` - The top-up was applied
    /// - `Ok(false)` - The record changed since `renewed_from` was read
    pub async fn top_up(
        &self,
        renewed_from: &entity::rishta_entitlement::Model,
        credits: i32,
        valid_to: NaiveDateTime,
        reactivate: bool,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        use entity::rishta_entitlement::Column;

        let mut update = entity::prelude::RishtaEntitlement::update_many()
            .col_expr(Column::RemainingCredits, offset(Column::RemainingCredits, credits))
            .col_expr(Column::MaxCredits, offset(Column::MaxCredits, credits))
            .col_expr(Column::ValidTo, Expr::value(valid_to))
            .col_expr(Column::UpdatedAt, Expr::value(now));

        if reactivate {
            update = update.col_expr(Column::Status, Expr::value(EntitlementStatus::Active));
        }

        let result = update
            .filter(Column::Id.eq(renewed_from.id))
            .filter(Column::ValidTo.eq(renewed_from.valid_to))
            .filter(Column::Status.eq(renewed_from.status.clone()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Overwrites the provided fields of `current`
    ///
    /// Fields left as `None` are unchanged. The update only applies while the credits, validity
    /// end and status still match `current`, so a concurrent unlock or top-up is never
    /// silently overwritten.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The adjusted record
    /// - `Ok(None)` - The record changed or disappeared since `current` was read
    pub async fn apply_adjustment(
        &self,
        current: &entity::rishta_entitlement::Model,
        adjustment: EntitlementAdjustment,
        now: NaiveDateTime,
    ) -> Result<Option<entity::rishta_entitlement::Model>, DbErr> {
        use entity::rishta_entitlement::Column;

        let mut update = entity::prelude::RishtaEntitlement::update_many()
            .col_expr(Column::UpdatedAt, Expr::value(now));

        if let Some(max_credits) = adjustment.max_credits {
            update = update.col_expr(Column::MaxCredits, Expr::value(max_credits));
        }
        if let Some(remaining_credits) = adjustment.remaining_credits {
            update = update.col_expr(Column::RemainingCredits, Expr::value(remaining_credits));
        }
        if let Some(valid_to) = adjustment.valid_to {
            update = update.col_expr(Column::ValidTo, Expr::value(valid_to));
        }
        if let Some(status) = adjustment.status {
            update = update.col_expr(Column::Status, Expr::value(status));
        }

        let result = update
            .filter(Column::Id.eq(current.id))
            .filter(Column::MaxCredits.eq(current.max_credits))
            .filter(Column::RemainingCredits.eq(current.remaining_credits))
            .filter(Column::ValidTo.eq(current.valid_to))
            .filter(Column::Status.eq(current.status.clone()))
            .exec(self.db)
            .await?;

        if result.rows_affected != 1 {
            return Ok(None);
        }

        self.get_by_id(current.id).await
    }

    /// Marks every active entitlement whose validity ended before `now` as expired
    ///
    /// Returns the number of entitlements transitioned.
    pub async fn expire_lapsed(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        use entity::rishta_entitlement::Column;

        let result = entity::prelude::RishtaEntitlement::update_many()
            .col_expr(Column::Status, Expr::value(EntitlementStatus::Expired))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Status.eq(EntitlementStatus::Active))
            .filter(Column::ValidTo.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// `column + delta` evaluated by the database
fn offset(column: entity::rishta_entitlement::Column, delta: i32) -> SimpleExpr {
    use sea_orm::sea_query::ExprTrait;

    Expr::col(column).add(delta)
}

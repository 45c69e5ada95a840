use chrono::{Duration, NaiveDateTime, Utc};
use entity::rishta_entitlement::EntitlementStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{TestContext, TestError};

pub struct EntitlementFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

impl<'a> EntitlementFixtures<'a> {
    /// Insert an active entitlement with `credits` remaining out of `credits`, valid from
    /// yesterday until 90 days from now.
    pub async fn insert_active_entitlement(
        &self,
        owner_id: i32,
        credits: i32,
    ) -> Result<entity::rishta_entitlement::Model, TestError> {
        let now = Utc::now().naive_utc();

        self.insert_entitlement(
            owner_id,
            credits,
            credits,
            now - Duration::days(1),
            now + Duration::days(90),
            EntitlementStatus::Active,
        )
        .await
    }

    /// Insert an entitlement with full control over credits, validity window and status.
    pub async fn insert_entitlement(
        &self,
        owner_id: i32,
        remaining_credits: i32,
        max_credits: i32,
        valid_from: NaiveDateTime,
        valid_to: NaiveDateTime,
        status: EntitlementStatus,
    ) -> Result<entity::rishta_entitlement::Model, TestError> {
        let now = Utc::now().naive_utc();

        let entitlement = entity::rishta_entitlement::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            access_token: ActiveValue::Set(format!("test-token-{}", owner_id)),
            max_credits: ActiveValue::Set(max_credits),
            remaining_credits: ActiveValue::Set(remaining_credits),
            consumed_count: ActiveValue::Set(max_credits - remaining_credits),
            valid_from: ActiveValue::Set(valid_from),
            valid_to: ActiveValue::Set(valid_to),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(entitlement.insert(&self.setup.db).await?)
    }

    /// Record `profile_id` as already unlocked by the entitlement without touching credits.
    pub async fn insert_unlock(
        &self,
        entitlement_id: i32,
        profile_id: i32,
    ) -> Result<entity::rishta_entitlement_unlock::Model, TestError> {
        let unlock = entity::rishta_entitlement_unlock::ActiveModel {
            entitlement_id: ActiveValue::Set(entitlement_id),
            profile_id: ActiveValue::Set(profile_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(unlock.insert(&self.setup.db).await?)
    }

    /// Reload an entitlement by ID.
    pub async fn get(
        &self,
        entitlement_id: i32,
    ) -> Result<Option<entity::rishta_entitlement::Model>, TestError> {
        Ok(entity::prelude::RishtaEntitlement::find_by_id(entitlement_id)
            .one(&self.setup.db)
            .await?)
    }
}

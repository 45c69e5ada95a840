use chrono::{NaiveDate, Utc};
use object_store::{path::Path, ObjectStore, PutPayload};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{constant::TEST_IMAGE_BYTES, TestContext, TestError};

pub struct ProfileFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

/// Visibility flags applied with [`ProfileFixtures::set_flags`]
#[derive(Clone, Copy, Debug)]
pub struct ProfileFlags {
    pub is_published: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub is_unlocked: bool,
}

impl Default for ProfileFlags {
    fn default() -> Self {
        Self {
            is_published: true,
            is_active: true,
            is_deleted: false,
            is_unlocked: false,
        }
    }
}

impl<'a> ProfileFixtures<'a> {
    /// Insert a published, active profile with every field populated.
    pub async fn insert_profile(
        &self,
        owner_id: i32,
        code: &str,
    ) -> Result<entity::rishta_profile::Model, TestError> {
        let now = Utc::now().naive_utc();
        let date_of_birth = NaiveDate::from_ymd_opt(1996, 4, 12).unwrap_or_default();

        let profile = entity::rishta_profile::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            code: ActiveValue::Set(code.to_string()),
            first_name: ActiveValue::Set("Meera".to_string()),
            surname: ActiveValue::Set("Sharma".to_string()),
            date_of_birth: ActiveValue::Set(date_of_birth),
            height_cm: ActiveValue::Set(Some(162)),
            marital_status: ActiveValue::Set("never_married".to_string()),
            caste: ActiveValue::Set(Some("Brahmin".to_string())),
            gotra: ActiveValue::Set(Some("Kashyap".to_string())),
            education: ActiveValue::Set(Some("M.Tech".to_string())),
            occupation: ActiveValue::Set(Some("Engineer".to_string())),
            city: ActiveValue::Set(Some("Jaipur".to_string())),
            state: ActiveValue::Set(Some("Rajasthan".to_string())),
            contact_number: ActiveValue::Set(Some("+91 98290 00000".to_string())),
            postal_address: ActiveValue::Set(Some("12 Civil Lines, Jaipur".to_string())),
            about: ActiveValue::Set(Some("Enjoys classical music".to_string())),
            is_published: ActiveValue::Set(true),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            is_unlocked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(profile.insert(&self.setup.db).await?)
    }

    /// Overwrite the visibility flags of an existing profile.
    pub async fn set_flags(
        &self,
        profile_id: i32,
        flags: ProfileFlags,
    ) -> Result<entity::rishta_profile::Model, TestError> {
        let profile = entity::prelude::RishtaProfile::find_by_id(profile_id)
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("profile ID {}", profile_id))
            })?;

        let mut profile_am = profile.into_active_model();
        profile_am.is_published = ActiveValue::Set(flags.is_published);
        profile_am.is_active = ActiveValue::Set(flags.is_active);
        profile_am.is_deleted = ActiveValue::Set(flags.is_deleted);
        profile_am.is_unlocked = ActiveValue::Set(flags.is_unlocked);

        Ok(profile_am.update(&self.setup.db).await?)
    }

    /// Insert a photo record and write its object to the in-memory store.
    pub async fn insert_photo(
        &self,
        profile_id: i32,
        storage_key: &str,
        is_primary: bool,
        position: i32,
    ) -> Result<entity::rishta_profile_photo::Model, TestError> {
        self.setup
            .media
            .put(&Path::from(storage_key), PutPayload::from_static(TEST_IMAGE_BYTES))
            .await?;

        self.insert_unstored_photo(profile_id, storage_key, is_primary, position)
            .await
    }

    /// Insert a photo record whose object is missing from the store, signing it will fail.
    pub async fn insert_unstored_photo(
        &self,
        profile_id: i32,
        storage_key: &str,
        is_primary: bool,
        position: i32,
    ) -> Result<entity::rishta_profile_photo::Model, TestError> {
        let photo = entity::rishta_profile_photo::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            storage_key: ActiveValue::Set(storage_key.to_string()),
            is_primary: ActiveValue::Set(is_primary),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(photo.insert(&self.setup.db).await?)
    }
}

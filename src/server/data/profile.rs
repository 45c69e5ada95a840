use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a profile by ID regardless of its visibility flags
    pub async fn get_by_id(
        &self,
        profile_id: i32,
    ) -> Result<Option<entity::rishta_profile::Model>, DbErr> {
        entity::prelude::RishtaProfile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    /// Lists published, active and non-deleted profiles, newest first
    ///
    /// `page` is zero-based.
    pub async fn list_listed(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::rishta_profile::Model>, DbErr> {
        use entity::rishta_profile::Column;

        entity::prelude::RishtaProfile::find()
            .filter(Column::IsPublished.eq(true))
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(page.saturating_mul(per_page))
            .limit(per_page)
            .all(self.db)
            .await
    }

    /// Gets the photos of a profile, primary photo first then by position
    pub async fn get_photos(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::rishta_profile_photo::Model>, DbErr> {
        self.get_photos_of_many(&[profile_id]).await
    }

    /// Gets the photos of every provided profile, primary photo first then by position
    pub async fn get_photos_of_many(
        &self,
        profile_ids: &[i32],
    ) -> Result<Vec<entity::rishta_profile_photo::Model>, DbErr> {
        use entity::rishta_profile_photo::Column;

        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RishtaProfilePhoto::find()
            .filter(Column::ProfileId.is_in(profile_ids.iter().copied()))
            .order_by_desc(Column::IsPrimary)
            .order_by_asc(Column::Position)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }
}

//! Profile visibility resolution.
//!
//! Decides for each (viewer, profile) pair whether the full or the redacted projection is
//! returned, and signs photo URLs for it. Redacted projections only ever sign the primary
//! photo.

pub mod access;
pub mod projection;

#[cfg(test)]
mod tests;

use std::{collections::HashMap, time::Duration};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        entitlement::UnlockResultDto,
        profile::{PhotoDto, ProfileListDto, ProfileViewDto},
    },
    server::{
        data::{entitlement::EntitlementRepository, profile::ProfileRepository},
        error::{profile::ProfileError, Error},
        model::identity::CurrentUser,
        service::{
            entitlement::unlock::UnlockService,
            profile::access::{
                decide_projection, is_visible_to, Projection, ProfileVisibility, ViewerRelation,
            },
            retry::RetryContext,
        },
        storage::MediaStore,
    },
};

/// Upper bound on `per_page` for profile listings
pub const MAX_PER_PAGE: u64 = 100;

/// A profile with its photos and the projection chosen for the viewer
struct ResolvedProfile {
    profile: entity::rishta_profile::Model,
    photos: Vec<entity::rishta_profile_photo::Model>,
    projection: Projection,
}

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
    photo_url_ttl: Duration,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of ProfileService.
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore, photo_url_ttl: Duration) -> Self {
        Self {
            db,
            media,
            photo_url_ttl,
        }
    }

    /// Resolves one profile for a viewer.
    ///
    /// # Returns
    /// - `Ok(ProfileViewDto)` - Full or redacted projection
    /// - `Err(Error::ProfileError(ProfileError::NotFound))` - Profile does not exist, or is hidden and the viewer is neither owner nor admin
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn resolve(
        &self,
        profile_id: i32,
        viewer: Option<&CurrentUser>,
        is_admin: bool,
    ) -> Result<ProfileViewDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let viewer_id = viewer.map(|user| user.id);

        let resolved = ctx
            .execute_with_retry(&format!("resolve of profile ID {}", profile_id), |_| {
                let db = db.clone();

                Box::pin(async move {
                    let profile_repo = ProfileRepository::new(&db);

                    let profile = profile_repo
                        .get_by_id(profile_id)
                        .await?
                        .ok_or(ProfileError::NotFound(profile_id))?;

                    let relation = ViewerRelation::of(viewer_id, is_admin, profile.owner_id);
                    if !is_visible_to(&profile, relation) {
                        return Err(ProfileError::NotFound(profile_id).into());
                    }

                    let visibility = ProfileVisibility::of(&profile);
                    let has_unlock = match (visibility, relation) {
                        (ProfileVisibility::Gated, ViewerRelation::Member(member_id)) => {
                            EntitlementRepository::new(&db)
                                .unlocked_among(member_id, &[profile.id])
                                .await?
                                .contains(&profile.id)
                        }
                        _ => false,
                    };

                    let photos = profile_repo.get_photos(profile.id).await?;

                    Ok(ResolvedProfile {
                        projection: decide_projection(visibility, relation, has_unlock),
                        profile,
                        photos,
                    })
                })
            })
            .await?;

        Ok(self.project(resolved).await)
    }

    /// Resolves a page of listed profiles for a viewer.
    ///
    /// The viewer's unlocked set is loaded once for the whole page. `page` is zero-based and
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub async fn resolve_many(
        &self,
        viewer: Option<&CurrentUser>,
        is_admin: bool,
        page: u64,
        per_page: u64,
    ) -> Result<ProfileListDto, Error> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let viewer_id = viewer.map(|user| user.id);

        let resolved = ctx
            .execute_with_retry(&format!("listing of profiles page {}", page), |_| {
                let db = db.clone();

                Box::pin(async move {
                    let profile_repo = ProfileRepository::new(&db);

                    let profiles = profile_repo.list_listed(page, per_page).await?;
                    let profile_ids: Vec<i32> = profiles.iter().map(|profile| profile.id).collect();

                    let unlocked = match viewer_id {
                        Some(viewer_id) if !is_admin => {
                            EntitlementRepository::new(&db)
                                .unlocked_among(viewer_id, &profile_ids)
                                .await?
                        }
                        _ => Default::default(),
                    };

                    let mut photos_by_profile: HashMap<i32, Vec<entity::rishta_profile_photo::Model>> =
                        HashMap::new();
                    for photo in profile_repo.get_photos_of_many(&profile_ids).await? {
                        photos_by_profile
                            .entry(photo.profile_id)
                            .or_default()
                            .push(photo);
                    }

                    let resolved: Vec<ResolvedProfile> = profiles
                        .into_iter()
                        .map(|profile| {
                            let relation =
                                ViewerRelation::of(viewer_id, is_admin, profile.owner_id);
                            let projection = decide_projection(
                                ProfileVisibility::of(&profile),
                                relation,
                                unlocked.contains(&profile.id),
                            );
                            let photos = photos_by_profile.remove(&profile.id).unwrap_or_default();

                            ResolvedProfile {
                                profile,
                                photos,
                                projection,
                            }
                        })
                        .collect();

                    Ok(resolved)
                })
            })
            .await?;

        let mut profiles = Vec::with_capacity(resolved.len());
        for profile in resolved {
            profiles.push(self.project(profile).await);
        }

        Ok(ProfileListDto {
            profiles,
            page,
            per_page,
        })
    }

    /// Unlocks a profile for the viewer and returns its full projection.
    ///
    /// Owners and administrators never spend a credit, they are reported as already unlocked
    /// with their current balance.
    ///
    /// # Returns
    /// - `Ok(UnlockResultDto)` - Unlock outcome together with the full projection
    /// - `Err(Error::ProfileError(ProfileError::NotFound))` - Profile does not exist or is hidden from the viewer
    /// - `Err(Error::EntitlementError(_))` - Viewer has no usable entitlement, see [`UnlockService::unlock`]
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn unlock(
        &self,
        profile_id: i32,
        viewer: &CurrentUser,
        is_admin: bool,
    ) -> Result<UnlockResultDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let viewer_id = viewer.id;

        let (relation, owner_balance) = ctx
            .execute_with_retry(
                &format!("unlock precheck of profile ID {} by user ID {}", profile_id, viewer_id),
                |_| {
                    let db = db.clone();

                    Box::pin(async move {
                        let profile = ProfileRepository::new(&db)
                            .get_by_id(profile_id)
                            .await?
                            .ok_or(ProfileError::NotFound(profile_id))?;

                        let relation =
                            ViewerRelation::of(Some(viewer_id), is_admin, profile.owner_id);
                        if !is_visible_to(&profile, relation) {
                            return Err(ProfileError::NotFound(profile_id).into());
                        }

                        let owner_balance = match relation {
                            ViewerRelation::OwnerOrAdmin => EntitlementRepository::new(&db)
                                .get_by_owner(viewer_id)
                                .await?
                                .map(|entitlement| entitlement.remaining_credits)
                                .unwrap_or(0),
                            _ => 0,
                        };

                        Ok((relation, owner_balance))
                    })
                },
            )
            .await?;

        let (already_unlocked, remaining_credits) = match relation {
            ViewerRelation::OwnerOrAdmin => (true, owner_balance),
            _ => {
                let outcome = UnlockService::new(self.db)
                    .unlock(viewer_id, profile_id)
                    .await?;

                (outcome.already_unlocked, outcome.remaining_credits)
            }
        };

        let profile = self.resolve(profile_id, Some(viewer), is_admin).await?;

        Ok(UnlockResultDto {
            already_unlocked,
            remaining_credits,
            profile,
        })
    }

    async fn project(&self, resolved: ResolvedProfile) -> ProfileViewDto {
        let today = Utc::now().date_naive();

        match resolved.projection {
            Projection::Full => {
                let mut photos = Vec::with_capacity(resolved.photos.len());
                for photo in &resolved.photos {
                    photos.push(self.sign_photo(photo).await);
                }

                ProfileViewDto::Full(projection::full(resolved.profile, photos, today))
            }
            Projection::Redacted => {
                let photo = match projection::primary_photo(&resolved.photos) {
                    Some(photo) => Some(self.sign_photo(photo).await),
                    None => None,
                };

                ProfileViewDto::Redacted(projection::redacted(&resolved.profile, photo, today))
            }
        }
    }

    async fn sign_photo(&self, photo: &entity::rishta_profile_photo::Model) -> PhotoDto {
        PhotoDto {
            url: self
                .media
                .sign_or_fallback(&photo.storage_key, self.photo_url_ttl)
                .await,
            is_primary: photo.is_primary,
        }
    }
}

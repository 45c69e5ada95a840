//! Pure visibility decisions for one (viewer, profile) pair.

/// How a profile is gated, independent of who is looking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileVisibility {
    /// Broadcast unlock, every viewer including anonymous ones sees the full profile
    ForcedPublic,
    /// Full profile only for the owner, administrators and viewers who unlocked it
    Gated,
}

impl ProfileVisibility {
    pub fn of(profile: &entity::rishta_profile::Model) -> Self {
        if profile.is_unlocked {
            Self::ForcedPublic
        } else {
            Self::Gated
        }
    }
}

/// Who is looking at a profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerRelation {
    Anonymous,
    /// The profile's owner or an administrator, bypasses every entitlement check
    OwnerOrAdmin,
    /// Any other signed-in user, identified by ID
    Member(i32),
}

impl ViewerRelation {
    pub fn of(viewer_id: Option<i32>, is_admin: bool, profile_owner_id: i32) -> Self {
        match viewer_id {
            None => Self::Anonymous,
            Some(_) if is_admin => Self::OwnerOrAdmin,
            Some(viewer_id) if viewer_id == profile_owner_id => Self::OwnerOrAdmin,
            Some(viewer_id) => Self::Member(viewer_id),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    Full,
    Redacted,
}

/// Picks the projection for a viewer
///
/// `has_unlock` is only consulted for [`ViewerRelation::Member`] viewers of gated profiles.
pub fn decide_projection(
    visibility: ProfileVisibility,
    relation: ViewerRelation,
    has_unlock: bool,
) -> Projection {
    match (visibility, relation) {
        (_, ViewerRelation::OwnerOrAdmin) => Projection::Full,
        (ProfileVisibility::ForcedPublic, _) => Projection::Full,
        (ProfileVisibility::Gated, ViewerRelation::Member(_)) if has_unlock => Projection::Full,
        (ProfileVisibility::Gated, _) => Projection::Redacted,
    }
}

/// Published, active and not deleted
pub fn is_listed(profile: &entity::rishta_profile::Model) -> bool {
    profile.is_published && profile.is_active && !profile.is_deleted
}

/// Hidden profiles exist only for their owner and administrators
pub fn is_visible_to(profile: &entity::rishta_profile::Model, relation: ViewerRelation) -> bool {
    is_listed(profile) || relation == ViewerRelation::OwnerOrAdmin
}

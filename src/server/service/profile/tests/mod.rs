
use rishta_test_utils::{fixtures::profile::ProfileFlags, prelude::*};
use sea_orm::EntityTrait;

use super::*;

fn media(test: &TestContext) -> MediaStore {
    MediaStore::Memory(test.media.clone())
}

fn ttl() -> Duration {
    Duration::from_secs(TEST_PHOTO_URL_TTL_SECS)
}

fn current_user(user: &entity::rishta_user::Model) -> CurrentUser {
    CurrentUser::from(user.clone())
}

/// Inserts an owner with one listed profile carrying a primary and a secondary photo
async fn listed_profile_with_photos(
    test: &TestContext,
) -> Result<entity::rishta_profile::Model, TestError> {
    let owner = test.user().insert_user("meera").await?;
    let profile = test.profile().insert_profile(owner.id, "RM1001").await?;
    test.profile()
        .insert_photo(profile.id, "photos/rm1001/primary.jpg", true, 0)
        .await?;
    test.profile()
        .insert_photo(profile.id, "photos/rm1001/second.jpg", false, 1)
        .await?;

    Ok(profile)
}

fn assert_redacted(view: &ProfileViewDto) {
    let ProfileViewDto::Redacted(redacted) = view else {
        panic!("expected redacted projection, got {:?}", view);
    };

    let json = serde_json::to_value(redacted).unwrap();
    assert!(json.get("contact_number").is_none());
    assert!(json.get("postal_address").is_none());
    assert!(json.get("surname").is_none());
    assert!(json.get("photos").is_none());
}

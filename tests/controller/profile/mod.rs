mod get_profile;
mod get_profiles;
mod unlock_profile;

use super::*;

/// Inserts an owner with one listed profile carrying a primary and a secondary photo
async fn listed_profile(test: &TestContext) -> Result<entity::rishta_profile::Model, TestError> {
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

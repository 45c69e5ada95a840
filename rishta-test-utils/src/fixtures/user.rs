use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{TestContext, TestError};

pub struct UserFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with email `<username>@example.com`.
    pub async fn insert_user(&self, username: &str) -> Result<entity::rishta_user::Model, TestError> {
        self.insert_user_with_email(username, &format!("{}@example.com", username))
            .await
    }

    /// Insert a user with an explicit email.
    pub async fn insert_user_with_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<entity::rishta_user::Model, TestError> {
        let user = entity::rishta_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}

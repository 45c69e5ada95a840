use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        username: &str,
        email: &str,
    ) -> Result<entity::rishta_user::Model, DbErr> {
        let user = entity::rishta_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::rishta_user::Model>, DbErr> {
        entity::prelude::RishtaUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RishtaUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use rishta_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_entitlement_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("asha", "asha@example.com").await;

            assert!(result.is_ok());

            Ok(())
        }

        /// Expect Error when the username is already taken
        #[tokio::test]
        async fn fails_for_duplicate_username() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_entitlement_tables()
                .with_user("asha")
                .build()
                .await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("asha", "other@example.com").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use rishta_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_entitlement_tables().build().await?;
            let user_model = test.user().insert_user("asha").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(user_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_entitlement_tables().build().await?;

            let nonexistent_user_id = 1;
            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(nonexistent_user_id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let user_repo = UserRepository::new(&test.db);

            let result = user_repo.get_by_id(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete {
        use rishta_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect one row affected when deleting an existing user
        #[tokio::test]
        async fn deletes_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_entitlement_tables().build().await?;
            let user_model = test.user().insert_user("asha").await?;

            let user_repository = UserRepository::new(&test.db);
            let delete_result = user_repository.delete(user_model.id).await?;

            assert_eq!(delete_result.rows_affected, 1);
            assert!(user_repository.get_by_id(user_model.id).await?.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting user that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_entitlement_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let delete_result = user_repository.delete(1).await?;

            assert_eq!(delete_result.rows_affected, 0);

            Ok(())
        }
    }
}

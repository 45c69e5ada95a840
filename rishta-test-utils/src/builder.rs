//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Table creation and user fixtures are queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_entitlement_tables: bool,
    usernames: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_entitlement_tables: false,
            usernames: Vec::new(),
        }
    }

    /// Add every table used by the entitlement and profile visibility gate.
    ///
    /// Creates RishtaUser, RishtaProfile, RishtaProfilePhoto, RishtaEntitlement,
    /// RishtaEntitlementUnlock and RishtaPaymentRequest in foreign key order.
    pub fn with_entitlement_tables(mut self) -> Self {
        self.include_entitlement_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rishta_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), rishta_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(RishtaUser)
    ///     .with_table(RishtaProfile)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided username during `build()`.
    ///
    /// The email is derived from the username, see [`UserFixtures::insert_user`](crate::fixtures::user::UserFixtures::insert_user).
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.usernames.push(username.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_entitlement_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::RishtaUser),
                schema.create_table_from_entity(entity::prelude::RishtaProfile),
                schema.create_table_from_entity(entity::prelude::RishtaProfilePhoto),
                schema.create_table_from_entity(entity::prelude::RishtaEntitlement),
                schema.create_table_from_entity(entity::prelude::RishtaEntitlementUnlock),
                schema.create_table_from_entity(entity::prelude::RishtaPaymentRequest),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for username in self.usernames {
            setup.user().insert_user(&username).await?;
        }

        Ok(setup)
    }
}

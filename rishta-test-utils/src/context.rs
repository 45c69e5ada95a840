//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, an in-memory object store standing in for photo and payment
//! proof storage, and a session for testing handlers that read the current user.

use std::sync::Arc;

use object_store::memory::InMemory;
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{
        entitlement::EntitlementFixtures, payment::PaymentFixtures, profile::ProfileFixtures,
        user::UserFixtures,
    },
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_entitlement_tables().build().await?;
///
/// let viewer = test.user().insert_user("viewer").await?;
/// let entitlement = test.entitlement().insert_active_entitlement(viewer.id, 30).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Object store used for profile photos and payment proofs
    pub media: Arc<InMemory>,
    /// Session for handlers resolving the current user
    pub session: Session,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            media: Arc::new(InMemory::new()),
            session,
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixtures for `rishta_user` records
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }

    /// Fixtures for profiles and their photos
    pub fn profile(&self) -> ProfileFixtures<'_> {
        ProfileFixtures { setup: self }
    }

    /// Fixtures for entitlement records and their unlocked profile sets
    pub fn entitlement(&self) -> EntitlementFixtures<'_> {
        EntitlementFixtures { setup: self }
    }

    /// Fixtures for payment requests and stored payment proofs
    pub fn payment(&self) -> PaymentFixtures<'_> {
        PaymentFixtures { setup: self }
    }
}

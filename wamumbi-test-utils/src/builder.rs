//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,            // auth IDs
    campaigns: Vec<(String, i64)>, // (title, goal_amount)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            campaigns: Vec::new(),
        }
    }

    /// Add every Wamumbi table to the test database.
    ///
    /// Tables are created in dependency order: WamumbiUser, Campaign, then Donation.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wamumbi_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), wamumbi_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(WamumbiUser)
    ///     .with_table(Campaign)
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

    /// Insert a user with the provided auth ID.
    ///
    /// Inserted users are available in `TestSetup::users` in the order they were queued.
    pub fn with_user(mut self, auth_id: impl Into<String>) -> Self {
        self.users.push(auth_id.into());
        self
    }

    /// Insert an active campaign with nothing raised yet.
    ///
    /// Inserted campaigns are available in `TestSetup::campaigns` in the order they were
    /// queued.
    pub fn with_campaign(mut self, title: impl Into<String>, goal_amount: i64) -> Self {
        self.campaigns.push((title.into(), goal_amount));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::WamumbiUser),
                schema.create_table_from_entity(entity::prelude::Campaign),
                schema.create_table_from_entity(entity::prelude::Donation),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for auth_id in self.users {
            let user = setup.user().insert_user(&auth_id).await?;
            setup.users.push(user);
        }

        for (title, goal_amount) in self.campaigns {
            let campaign = setup
                .campaign()
                .insert_campaign(&title, goal_amount)
                .await?;
            setup.campaigns.push(campaign);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

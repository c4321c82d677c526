use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, User};
///
/// let test = TestBuilder::new()
///     .with_table(Location)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to work with users and their locations.
    ///
    /// Adds, in dependency order: Location, User.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Location).with_table(User)
    }

    /// Adds the tables needed for group and student operations.
    ///
    /// Adds, in dependency order: Location, User, Status, StudentGroup, GroupTeacher,
    /// EnglishLevel, Expert, Student. Students are included because group queries
    /// report student counts.
    pub fn with_group_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Status)
            .with_table(StudentGroup)
            .with_table(GroupTeacher)
            .with_table(EnglishLevel)
            .with_table(Expert)
            .with_table(Student)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_group_tables()` followed by EventType and Event.
    pub fn with_all_tables(self) -> Self {
        self.with_group_tables()
            .with_table(EventType)
            .with_table(Event)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

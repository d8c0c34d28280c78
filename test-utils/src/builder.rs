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
/// use entity::prelude::{College, Course};
///
/// let test = TestBuilder::new()
///     .with_table(College)
///     .with_table(Course)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Name of the temp SQLite file to use instead of an in-memory database.
    file: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including unique constraints and foreign keys declared on the
    /// entity. Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the `users` table.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Adds the `colleges` and `courses` tables in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_college_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_college_tables(self) -> Self {
        self.with_table(College).with_table(Course)
    }

    /// Adds every table the application uses.
    pub fn with_all_tables(self) -> Self {
        self.with_user_tables().with_college_tables()
    }

    /// Uses a temp SQLite file instead of an in-memory database.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own empty database, so tests
    /// that run queries concurrently need a file. The file is removed when the
    /// `TestContext` is dropped.
    ///
    /// # Arguments
    /// - `name` - Name unique to the calling test
    pub fn with_file_database(mut self, name: &str) -> Self {
        self.file = Some(name.to_string());
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates the SQLite database connection and executes all CREATE TABLE statements
    /// that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file {
            Some(name) => TestContext::file_backed(&name),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Collegeboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the collegeboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory or
//! temp-file SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_college_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_college_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults so tests only
//! spell out the fields they care about. Each entity has a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (college, course) = factory::helpers::create_college_with_course(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let college = factory::college::CollegeFactory::new(&db)
//!     .name("MIT")
//!     .location("Cambridge")
//!     .build()
//!     .await?;
//! ```

pub mod college;
pub mod course;
pub mod helpers;
pub mod user;

pub use college::create_college;
pub use course::create_course;
pub use user::create_user;

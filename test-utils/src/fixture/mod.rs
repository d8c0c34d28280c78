//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of model conversions and DTO serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let college = fixture::college::entity();
//! let course = fixture::course::entity_with_fee(college.id, Decimal::from(250));
//! ```

pub mod college;
pub mod course;
pub mod user;

pub use college::entity as college_entity;
pub use user::entity as user_entity;

//! SeaORM entities for the `users`, `colleges` and `courses` tables.

pub mod prelude;

pub mod college;
pub mod course;
pub mod user;

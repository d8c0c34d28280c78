//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each operation issues a single statement; sequences come back as `Vec` (empty when
//! nothing matches) and keyed lookups as `Option`.

pub mod college;
pub mod course;
pub mod user;

#[cfg(test)]
mod test;

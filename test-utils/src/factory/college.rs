//! College factory for creating test college entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test colleges with customizable fields.
///
/// The stored `name_key` is always derived from `name` the same way the application
/// derives it, so lookups by name behave as they do in production.
pub struct CollegeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
}

impl<'a> CollegeFactory<'a> {
    /// Creates a new CollegeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"College {id}"`
    /// - location: `"Location {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("College {}", id),
            location: format!("Location {}", id),
        }
    }

    /// Sets the name for the college.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the location for the college.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builds and inserts the college entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::college::Model)` - Created college entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::college::Model, DbErr> {
        let name_key = self.name.trim().to_lowercase();

        entity::college::ActiveModel {
            name: ActiveValue::Set(self.name),
            name_key: ActiveValue::Set(name_key),
            location: ActiveValue::Set(self.location),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a college with default values.
pub async fn create_college(db: &DatabaseConnection) -> Result<entity::college::Model, DbErr> {
    CollegeFactory::new(db).build().await
}

/// Creates a college with a specific name.
pub async fn create_college_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::college::Model, DbErr> {
    CollegeFactory::new(db).name(name).build().await
}

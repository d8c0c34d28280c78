//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{prelude::Decimal, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses attached to a college.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    college_id: i32,
    name: String,
    fee: Decimal,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"`
    /// - fee: `1000`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `college_id` - ID of the college the course belongs to
    pub fn new(db: &'a DatabaseConnection, college_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            college_id,
            name: format!("Course {}", id),
            fee: Decimal::from(1000),
        }
    }

    /// Sets the name for the course.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the fee for the course.
    pub fn fee(mut self, fee: Decimal) -> Self {
        self.fee = fee;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            college_id: ActiveValue::Set(self.college_id),
            name: ActiveValue::Set(self.name),
            fee: ActiveValue::Set(self.fee),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values for the given college.
pub async fn create_course(
    db: &DatabaseConnection,
    college_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, college_id).build().await
}

//! Course data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::college::{Course, CreateCourseParam};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one course with a trimmed name.
    ///
    /// # Returns
    /// - `Ok(Course)` - The persisted course
    /// - `Err(DbErr)` - Database error, including a foreign key violation when
    ///   `college_id` does not reference an existing college
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            college_id: ActiveValue::Set(param.college_id),
            name: ActiveValue::Set(param.name.trim().to_string()),
            fee: ActiveValue::Set(param.fee),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(course))
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

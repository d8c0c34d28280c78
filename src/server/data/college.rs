//! College data repository.
//!
//! Name lookups go through the normalized `name_key` column, which is also the column the
//! store keeps unique. Joined reads are a single INNER JOIN statement, so colleges with no
//! courses never appear in them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use rust_decimal::Decimal;

use crate::server::model::college::{
    college_name_key, College, CollegeCourse, CreateCollegeParam,
};

/// Row shape of the colleges/courses join.
#[derive(Debug, FromQueryResult)]
struct CollegeCourseRow {
    college_id: i32,
    college_name: String,
    location: String,
    course: String,
    fee: Decimal,
}

pub struct CollegeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollegeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all colleges ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<College>, DbErr> {
        let colleges = entity::prelude::College::find()
            .order_by_asc(entity::college::Column::Id)
            .all(self.db)
            .await?;

        Ok(colleges.into_iter().map(College::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<College>, DbErr> {
        let college = entity::prelude::College::find_by_id(id).one(self.db).await?;

        Ok(college.map(College::from_entity))
    }

    /// Finds a college by name, ignoring case and surrounding whitespace.
    ///
    /// # Returns
    /// - `Ok(Some(College))` - College whose normalized name matches
    /// - `Ok(None)` - No such college
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<College>, DbErr> {
        let college = entity::prelude::College::find()
            .filter(entity::college::Column::NameKey.eq(college_name_key(name)))
            .one(self.db)
            .await?;

        Ok(college.map(College::from_entity))
    }

    /// Inserts a college with trimmed name and location.
    ///
    /// # Returns
    /// - `Ok(College)` - The created college
    /// - `Err(DbErr)` - Database error, including a unique violation when a college with
    ///   the same normalized name already exists
    pub async fn create(&self, param: CreateCollegeParam) -> Result<College, DbErr> {
        let college = entity::college::ActiveModel {
            name_key: ActiveValue::Set(college_name_key(&param.name)),
            name: ActiveValue::Set(param.name.trim().to_string()),
            location: ActiveValue::Set(param.location.trim().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(College::from_entity(college))
    }

    /// Gets one row per (college, course) pair via an inner join.
    ///
    /// Rows are ordered by college ID, then course ID.
    pub async fn get_all_with_courses(&self) -> Result<Vec<CollegeCourse>, DbErr> {
        let rows = entity::prelude::College::find()
            .select_only()
            .column_as(entity::college::Column::Id, "college_id")
            .column_as(entity::college::Column::Name, "college_name")
            .column_as(entity::college::Column::Location, "location")
            .column_as(entity::course::Column::Name, "course")
            .column_as(entity::course::Column::Fee, "fee")
            .inner_join(entity::prelude::Course)
            .order_by_asc(entity::college::Column::Id)
            .order_by_asc(entity::course::Column::Id)
            .into_model::<CollegeCourseRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CollegeCourse {
                college_id: row.college_id,
                college_name: row.college_name,
                location: row.location,
                course: row.course,
                fee: row.fee,
            })
            .collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::College::find().count(self.db).await
    }

    /// Deletes every college; their courses go with them through the cascading FK.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::College::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

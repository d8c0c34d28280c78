//! College workflow service.
//!
//! Colleges are deduplicated by normalized name, so repeated submissions of the same
//! college accumulate courses instead of creating a second row. Multi-row writes run inside
//! one transaction and report only what was actually persisted.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{college::CollegeRepository, course::CourseRepository},
    error::AppError,
    model::college::{
        College, CollegeCourse, CollegeCreation, Course, CreateCollegeParam,
        CreateCollegeWithCoursesParam, CreateCourseParam,
    },
    util::db::{is_foreign_key_violation, is_unique_violation},
};

pub struct CollegeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CollegeService<'a> {
    /// Creates a new CollegeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every college ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<College>)` - At least one college
    /// - `Err(AppError::NotFound)` - No colleges exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<College>, AppError> {
        let colleges = CollegeRepository::new(self.db).get_all().await?;

        if colleges.is_empty() {
            return Err(AppError::NotFound("No colleges found".to_string()));
        }

        Ok(colleges)
    }

    /// Retrieves one row per (college, course) pair.
    ///
    /// Colleges without courses are not part of the result.
    ///
    /// # Returns
    /// - `Ok(Vec<CollegeCourse>)` - At least one joined row
    /// - `Err(AppError::NotFound)` - No college has any course
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_with_courses(&self) -> Result<Vec<CollegeCourse>, AppError> {
        let rows = CollegeRepository::new(self.db)
            .get_all_with_courses()
            .await?;

        if rows.is_empty() {
            return Err(AppError::NotFound("No colleges found".to_string()));
        }

        Ok(rows)
    }

    /// Creates a college that has no courses yet.
    ///
    /// # Returns
    /// - `Ok(College)` - The persisted college with trimmed name and location
    /// - `Err(AppError::Conflict)` - A college with the same name (ignoring case) exists
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create_without_courses(
        &self,
        param: CreateCollegeParam,
    ) -> Result<College, AppError> {
        let college_repo = CollegeRepository::new(self.db);

        if college_repo.find_by_name(&param.name).await?.is_some() {
            return Err(college_already_exists());
        }

        match college_repo.create(param).await {
            Ok(college) => {
                tracing::info!("Created college {} ({})", college.id, college.name);
                Ok(college)
            }
            Err(err) if is_unique_violation(&err) => Err(college_already_exists()),
            Err(err) => Err(err.into()),
        }
    }

    /// Creates a college with its courses, or attaches the courses to the existing college
    /// of the same name.
    ///
    /// Everything runs in one transaction: if any course insert fails, neither the college
    /// nor any of its new courses are kept.
    ///
    /// # Returns
    /// - `Ok(CollegeCreation::Created)` - New college plus persisted courses
    /// - `Ok(CollegeCreation::AddedToExisting)` - Existing college plus the newly persisted courses
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn create_with_courses(
        &self,
        param: CreateCollegeWithCoursesParam,
    ) -> Result<CollegeCreation, AppError> {
        let txn = self.db.begin().await?;

        let (college, created) = find_or_create_college(
            &txn,
            CreateCollegeParam {
                name: param.name,
                location: param.location,
            },
        )
        .await?;

        let course_repo = CourseRepository::new(&txn);
        let mut courses = Vec::with_capacity(param.courses.len());
        for course in param.courses {
            let course = course_repo
                .create(CreateCourseParam {
                    college_id: college.id,
                    name: course.name,
                    fee: course.fee,
                })
                .await?;
            courses.push(course);
        }

        txn.commit().await?;

        tracing::info!(
            "Stored {} course(s) for college {} ({}), college created: {}",
            courses.len(),
            college.id,
            college.name,
            created
        );

        if created {
            Ok(CollegeCreation::Created { college, courses })
        } else {
            Ok(CollegeCreation::AddedToExisting { college, courses })
        }
    }

    /// Adds one course to an existing college.
    ///
    /// # Returns
    /// - `Ok(Course)` - The persisted course
    /// - `Err(AppError::NotFound)` - `college_id` does not reference a college
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn add_course(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        let college_id = param.college_id;

        if CollegeRepository::new(self.db)
            .find_by_id(college_id)
            .await?
            .is_none()
        {
            return Err(college_not_found(college_id));
        }

        match CourseRepository::new(self.db).create(param).await {
            Ok(course) => Ok(course),
            // College deleted between the lookup and the insert
            Err(err) if is_foreign_key_violation(&err) => Err(college_not_found(college_id)),
            Err(err) => Err(err.into()),
        }
    }
}

/// Looks up the college by name inside `txn`, creating it when absent.
///
/// # Returns
/// - `Ok((College, true))` - College was created
/// - `Ok((College, false))` - College already existed
async fn find_or_create_college(
    txn: &DatabaseTransaction,
    param: CreateCollegeParam,
) -> Result<(College, bool), AppError> {
    if let Some(college) = CollegeRepository::new(txn)
        .find_by_name(&param.name)
        .await?
    {
        return Ok((college, false));
    }

    create_or_find_college(txn, param).await
}

/// Inserts the college under a savepoint of `txn`.
///
/// Losing a uniqueness race against a concurrent request only discards the insert, after
/// which the winner's row is used and `txn` stays usable.
///
/// # Returns
/// - `Ok((College, true))` - College was created
/// - `Ok((College, false))` - The name was taken, the existing college is returned
pub(super) async fn create_or_find_college(
    txn: &DatabaseTransaction,
    param: CreateCollegeParam,
) -> Result<(College, bool), AppError> {
    let college_repo = CollegeRepository::new(txn);
    let name = param.name.clone();
    let savepoint = txn.begin().await?;
    match CollegeRepository::new(&savepoint).create(param).await {
        Ok(college) => {
            savepoint.commit().await?;
            Ok((college, true))
        }
        Err(err) if is_unique_violation(&err) => {
            savepoint.rollback().await?;

            let college = college_repo
                .find_by_name(&name)
                .await?
                .ok_or_else(college_already_exists)?;

            Ok((college, false))
        }
        Err(err) => Err(err.into()),
    }
}

fn college_not_found(college_id: i32) -> AppError {
    AppError::NotFound(format!("College with id {} not found", college_id))
}

fn college_already_exists() -> AppError {
    AppError::Conflict("College with this name already exists".to_string())
}

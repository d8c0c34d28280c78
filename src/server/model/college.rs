//! College and course domain models and parameters.
//!
//! Colleges are deduplicated by a normalized name key (trimmed and lower-cased), which is
//! what makes "MIT" and " mit " the same college. Courses always belong to exactly one
//! college and carry a non-negative decimal fee.

use rust_decimal::Decimal;

use crate::{
    model::college::{
        CollegeCourseDto, CollegeDto, CollegeWithCoursesDto, CourseDto, CreateCollegeDto,
        CreateCourseDto, NewCourseDto,
    },
    server::{
        error::AppError,
        util::validate::{missing_fields, non_blank},
    },
};

/// Normalizes a college name into the key used for uniqueness checks.
pub fn college_name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
pub struct College {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl College {
    pub fn into_dto(self) -> CollegeDto {
        CollegeDto {
            college_id: self.id,
            college_name: self.name,
            location: self.location,
        }
    }

    /// Converts to the response shape shared by both college creation paths.
    pub fn into_dto_with_courses(self, courses: Vec<Course>) -> CollegeWithCoursesDto {
        CollegeWithCoursesDto {
            college_id: self.id,
            college_name: self.name,
            location: self.location,
            courses: courses.into_iter().map(Course::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::college::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub college_id: i32,
    pub name: String,
    pub fee: Decimal,
}

impl Course {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            course_id: self.id,
            college_id: self.college_id,
            course_name: self.name,
            fee: self.fee,
        }
    }

    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            college_id: entity.college_id,
            name: entity.name,
            fee: entity.fee,
        }
    }
}

/// One row of the inner join between colleges and courses.
///
/// A college with several courses yields one row per course; a college without courses
/// yields none.
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeCourse {
    pub college_id: i32,
    pub college_name: String,
    pub location: String,
    pub course: String,
    pub fee: Decimal,
}

impl CollegeCourse {
    pub fn into_dto(self) -> CollegeCourseDto {
        CollegeCourseDto {
            college_id: self.college_id,
            college_name: self.college_name,
            location: self.location,
            course: self.course,
            fee: self.fee,
        }
    }
}

/// Result of `CollegeService::create_with_courses`.
///
/// Both variants carry the courses that were actually persisted, in request order.
#[derive(Debug, Clone, PartialEq)]
pub enum CollegeCreation {
    /// No college with that name existed; it was created along with its courses.
    Created {
        college: College,
        courses: Vec<Course>,
    },
    /// A college with that name already existed; the courses were attached to it.
    AddedToExisting {
        college: College,
        courses: Vec<Course>,
    },
}

impl CollegeCreation {
    /// Response message describing which path was taken.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created { .. } => "College created successfully with courses",
            Self::AddedToExisting { .. } => "Course added to existing college",
        }
    }

    pub fn into_dto(self) -> CollegeWithCoursesDto {
        match self {
            Self::Created { college, courses } | Self::AddedToExisting { college, courses } => {
                college.into_dto_with_courses(courses)
            }
        }
    }
}

/// Parameters for creating a college without courses.
#[derive(Debug, Clone)]
pub struct CreateCollegeParam {
    pub name: String,
    pub location: String,
}

/// A course to be attached to a college that may not exist yet.
#[derive(Debug, Clone)]
pub struct NewCourseParam {
    pub name: String,
    pub fee: Decimal,
}

/// Parameters for creating a college together with its courses.
#[derive(Debug, Clone)]
pub struct CreateCollegeWithCoursesParam {
    pub name: String,
    pub location: String,
    pub courses: Vec<NewCourseParam>,
}

/// Validated form of `POST /api/colleges`.
#[derive(Debug, Clone)]
pub enum CreateCollegeRequest {
    WithoutCourses(CreateCollegeParam),
    WithCourses(CreateCollegeWithCoursesParam),
}

impl CreateCollegeRequest {
    /// Validates the request body and picks the creation path.
    ///
    /// A missing or empty `courses` array selects the path without courses. Every
    /// missing field, including those of nested courses, is named in the error.
    pub fn from_dto(dto: CreateCollegeDto) -> Result<Self, AppError> {
        let name = non_blank(dto.college_name);
        let location = non_blank(dto.location);
        let courses = dto.courses.unwrap_or_default();

        let mut missing: Vec<(String, bool)> = vec![
            ("collegeName".to_string(), name.is_none()),
            ("location".to_string(), location.is_none()),
        ];

        let mut parsed = Vec::with_capacity(courses.len());
        for (index, course) in courses.into_iter().enumerate() {
            let NewCourseDto { course_name, fee } = course;
            let course_name = non_blank(course_name);
            missing.push((format!("courses[{}].courseName", index), course_name.is_none()));
            missing.push((format!("courses[{}].fee", index), fee.is_none()));

            if let (Some(name), Some(fee)) = (course_name, fee) {
                parsed.push(NewCourseParam {
                    name,
                    fee: validate_fee(fee)?,
                });
            }
        }

        let (Some(name), Some(location)) = (name, location) else {
            return Err(missing_named_fields(&missing));
        };
        if missing.iter().any(|(_, is_missing)| *is_missing) {
            return Err(missing_named_fields(&missing));
        }

        if parsed.is_empty() {
            Ok(Self::WithoutCourses(CreateCollegeParam { name, location }))
        } else {
            Ok(Self::WithCourses(CreateCollegeWithCoursesParam {
                name,
                location,
                courses: parsed,
            }))
        }
    }
}

/// Parameters for inserting one course row.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub college_id: i32,
    pub name: String,
    pub fee: Decimal,
}

impl CreateCourseParam {
    /// Validates `POST /api/colleges/courses`.
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, AppError> {
        match (dto.college_id, non_blank(dto.course_name), dto.fee) {
            (Some(college_id), Some(name), Some(fee)) => Ok(Self {
                college_id,
                name,
                fee: validate_fee(fee)?,
            }),
            (college_id, name, fee) => Err(missing_fields(&[
                ("collegeId", college_id.is_none()),
                ("courseName", name.is_none()),
                ("fee", fee.is_none()),
            ])),
        }
    }
}

/// Largest fee the `decimal(10, 2)` fee column holds.
pub const MAX_FEE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Checks that a fee fits the `decimal(10, 2)` fee column.
///
/// Trailing zeros are ignored, so `1.500` is accepted as `1.50`.
///
/// # Returns
/// - `Ok(Decimal)` - The fee, unchanged
/// - `Err(AppError::BadRequest)` - Negative, above [`MAX_FEE`] or more than two decimal places
pub fn validate_fee(fee: Decimal) -> Result<Decimal, AppError> {
    if fee < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "fee must not be negative, got {}",
            fee
        )));
    }
    if fee > MAX_FEE {
        return Err(AppError::BadRequest(format!(
            "fee must not exceed {}, got {}",
            MAX_FEE, fee
        )));
    }
    if fee.normalize().scale() > 2 {
        return Err(AppError::BadRequest(format!(
            "fee must have at most two decimal places, got {}",
            fee
        )));
    }

    Ok(fee)
}

fn missing_named_fields(fields: &[(String, bool)]) -> AppError {
    let borrowed: Vec<(&str, bool)> = fields
        .iter()
        .map(|(name, is_missing)| (name.as_str(), *is_missing))
        .collect();

    missing_fields(&borrowed)
}

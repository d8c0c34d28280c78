use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollegeDto {
    pub college_id: i32,
    pub college_name: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub course_id: i32,
    pub college_id: i32,
    pub course_name: String,
    pub fee: Decimal,
}

/// A college together with the courses persisted for it by the same request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollegeWithCoursesDto {
    pub college_id: i32,
    pub college_name: String,
    pub location: String,
    pub courses: Vec<CourseDto>,
}

/// One row of the colleges/courses inner join.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollegeCourseDto {
    pub college_id: i32,
    pub college_name: String,
    pub location: String,
    pub course: String,
    pub fee: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseDto {
    pub course_name: Option<String>,
    pub fee: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollegeDto {
    pub college_name: Option<String>,
    pub location: Option<String>,
    /// Courses to attach; omitted or empty creates the college on its own.
    pub courses: Option<Vec<NewCourseDto>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub college_id: Option<i32>,
    pub course_name: Option<String>,
    pub fee: Option<Decimal>,
}

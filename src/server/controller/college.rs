use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        college::{
            CollegeCourseDto, CollegeDto, CollegeWithCoursesDto, CourseDto, CreateCollegeDto,
            CreateCourseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::college::{College, CollegeCourse, CreateCollegeRequest, CreateCourseParam},
        service::college::CollegeService,
        state::AppState,
    },
};

/// Tag for grouping college endpoints in OpenAPI documentation
pub static COLLEGE_TAG: &str = "college";

/// List all colleges.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - All colleges ordered by ID
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No colleges exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/colleges",
    tag = COLLEGE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Colleges fetched successfully", body = ApiResponse<Vec<CollegeDto>>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No colleges found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_colleges(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require()?;

    let colleges = CollegeService::new(&state.db).get_all().await?;

    let colleges: Vec<CollegeDto> = colleges.into_iter().map(College::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(colleges, "Colleges fetched successfully")),
    ))
}

/// List every (college, course) pair.
///
/// Colleges without courses are omitted.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - One row per course with its college fields
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No college has a course
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/colleges/courses",
    tag = COLLEGE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Colleges with courses fetched successfully", body = ApiResponse<Vec<CollegeCourseDto>>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No colleges found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_colleges_with_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require()?;

    let rows = CollegeService::new(&state.db)
        .get_all_with_courses()
        .await?;

    let rows: Vec<CollegeCourseDto> = rows.into_iter().map(CollegeCourse::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            rows,
            "Colleges with courses fetched successfully",
        )),
    ))
}

/// Create a college, optionally with courses.
///
/// Without courses the college must not exist yet. With courses, a college of the same
/// name (ignoring case) receives the courses instead of a new college being created.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - The college with its newly persisted courses, empty when none were sent
/// - `400 Bad Request` - Missing fields, fee outside `decimal(10, 2)` or malformed JSON
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `409 Conflict` - College exists and no courses were sent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/colleges",
    tag = COLLEGE_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateCollegeDto,
    responses(
        (status = 201, description = "College created, or courses added to the existing college. Without courses in the request `courses` is empty", body = ApiResponse<CollegeWithCoursesDto>),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "College with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_college(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateCollegeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require()?;

    let Json(payload) = payload?;
    let service = CollegeService::new(&state.db);

    let response = match CreateCollegeRequest::from_dto(payload)? {
        CreateCollegeRequest::WithoutCourses(param) => {
            let college = service.create_without_courses(param).await?;

            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    college.into_dto_with_courses(Vec::new()),
                    "College created successfully without courses",
                )),
            )
                .into_response()
        }
        CreateCollegeRequest::WithCourses(param) => {
            let creation = service.create_with_courses(param).await?;
            let message = creation.message();

            (
                StatusCode::CREATED,
                Json(ApiResponse::success(creation.into_dto(), message)),
            )
                .into_response()
        }
    };

    Ok(response)
}

/// Add a course to an existing college.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - The persisted course
/// - `400 Bad Request` - Missing fields, fee outside `decimal(10, 2)` or malformed JSON
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No college with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/colleges/courses",
    tag = COLLEGE_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course added to college successfully", body = ApiResponse<CourseDto>),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "College not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require()?;

    let Json(payload) = payload?;
    let param = CreateCourseParam::from_dto(payload)?;

    let course = CollegeService::new(&state.db).add_course(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            course.into_dto(),
            "Course added to college successfully",
        )),
    ))
}

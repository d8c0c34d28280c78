use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserDto, DeleteUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{email_from_delete_dto, CreateUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// An empty user table yields an empty list rather than an error.
///
/// # Returns
/// - `200 OK` - All users ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users fetched successfully", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(users, "Users fetched successfully")),
    ))
}

/// Register a new user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User name and email
///
/// # Returns
/// - `201 Created` - The persisted user
/// - `400 Bad Request` - Missing fields or malformed JSON
/// - `409 Conflict` - A user with that email already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            user.into_dto(),
            "User created successfully",
        )),
    ))
}

/// Delete a user by email.
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `400 Bad Request` - Missing email or malformed JSON
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users",
    tag = USER_TAG,
    request_body = DeleteUserDto,
    responses(
        (status = 200, description = "User deleted successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "User does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    payload: Result<Json<DeleteUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let email = email_from_delete_dto(payload)?;

    let user = UserService::new(&state.db).delete(&email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            user.into_dto(),
            "User deleted successfully",
        )),
    ))
}

//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, DeleteUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{missing_fields, non_blank},
    },
};

/// Registered user identified by a unique email address.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
}

impl CreateUserParam {
    /// Validates the request body, naming every missing field on failure.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Both fields present, trimmed
    /// - `Err(AppError::BadRequest)` - One or more fields missing or blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        match (non_blank(dto.name), non_blank(dto.email)) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            (name, email) => Err(missing_fields(&[
                ("name", name.is_none()),
                ("email", email.is_none()),
            ])),
        }
    }
}

/// Extracts the email from a delete request body.
pub fn email_from_delete_dto(dto: DeleteUserDto) -> Result<String, AppError> {
    non_blank(dto.email).ok_or_else(|| missing_fields(&[("email", true)]))
}

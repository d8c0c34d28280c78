//! User service for business logic.
//!
//! This module provides the `UserService` for the user workflow: listing, registering and
//! removing users. Email is the business key; the pre-check gives a friendly error while
//! the unique constraint on `users.email` stays authoritative for concurrent requests.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
    util::db::is_unique_violation,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Checks whether a user with the given email is registered.
    ///
    /// A failed lookup is reported as an error rather than being treated as a match.
    pub async fn exists(&self, email: &str) -> Result<bool, AppError> {
        let exists = UserRepository::new(self.db).exists_by_email(email).await?;
        Ok(exists)
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `param` - Validated name and email
    ///
    /// # Returns
    /// - `Ok(User)` - The persisted user
    /// - `Err(AppError::Conflict)` - A user with that email already exists
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        if self.exists(&param.email).await? {
            return Err(user_already_exists());
        }

        match UserRepository::new(self.db).create(param).await {
            Ok(user) => {
                tracing::info!("Created user {} ({})", user.id, user.email);
                Ok(user)
            }
            // Lost the race against a concurrent insert of the same email
            Err(err) if is_unique_violation(&err) => Err(user_already_exists()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes the user registered under `email`.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as it was before deletion
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn delete(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("User does not exist".to_string()));
        };

        if user_repo.delete_by_email(email).await? == 0 {
            // Deleted concurrently between the lookup and the delete
            return Err(AppError::NotFound("User does not exist".to_string()));
        }

        tracing::info!("Deleted user {} ({})", user.id, user.email);

        Ok(user)
    }
}

fn user_already_exists() -> AppError {
    AppError::Conflict("User already exists".to_string())
}

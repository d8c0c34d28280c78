//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Every method issues exactly one statement and converts entity models into domain
//! models at the boundary. Store errors are always returned as `Err`, never as data.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so it can run against the pool or inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with that email
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Checks whether a user with the given email exists.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new user stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Deletes the user with the given email.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_email(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

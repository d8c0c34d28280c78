use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the test database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

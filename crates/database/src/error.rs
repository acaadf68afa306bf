use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    /// Opening the connection, executing a statement, or reading a row failed
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("course {0} not found")]
    NotFound(String),
}

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error taxonomy of the schema layer.
///
/// Store-level failures that are not constraint breaches (connectivity,
/// transaction conflicts) pass through as [`SchemaError::Db`] untouched.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl SchemaError {
    /// Maps unique and foreign-key breaches reported by the store onto
    /// [`SchemaError::ConstraintViolation`].
    pub(crate) fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => SchemaError::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                SchemaError::ConstraintViolation(msg)
            }
            _ => SchemaError::Db(err),
        }
    }
}

//! ReklaMap database error types

use reklamap_core::error::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid stored value: {0}")]
    InvalidRow(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for LedgerError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(what) => LedgerError::NotFound(what),
            other => LedgerError::Storage(other.to_string()),
        }
    }
}

use todoboard_core::error::CoreError;

/// Error returned by repository writes.
///
/// Input is checked against the core rules before any SQL runs, so a write
/// fails either with a domain error or with the underlying sqlx error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

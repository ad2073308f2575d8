/// Unified error type for database operations.
///
/// Connection helpers, migrations and health checks all surface this, so
/// callers deal with one error vocabulary regardless of what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors bubbling up from SeaORM
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Health probe failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result alias for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "sqlx")]
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
    #[error("unknown error")]
    Unknown,
}

impl BackendError {
    /// Whether the underlying driver reported that no row matched the
    /// query; listing operations return empty collections instead, so
    /// this only happens on single record lookups.
    pub fn is_not_found(&self) -> bool {
        match self {
            #[cfg(feature = "sqlx")]
            BackendError::Sqlx(sqlx::Error::RowNotFound) => true,
            _ => false,
        }
    }

    /// Whether the underlying driver rejected the statement over a
    /// constraint, e.g. a submission referencing a foreign key that
    /// does not exist.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            #[cfg(feature = "sqlx")]
            BackendError::Sqlx(sqlx::Error::Database(e)) => {
                e.is_foreign_key_violation() || e.is_unique_violation()
            }
            _ => false,
        }
    }
}

//! Error types for the payment query service.

/// Domain-level errors (invariant violations in domain values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Month out of range, expected 1..=12: {0}")]
    MonthOutOfRange(u32),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Query-level errors (returned by the application service).
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

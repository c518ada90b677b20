/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by the image storage port.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.write_failed")]
    WriteFailed,
    #[error("storage.unavailable")]
    Unavailable,
}

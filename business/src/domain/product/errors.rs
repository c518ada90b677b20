/// A single rejected form field, reported back so the caller can re-render the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error("product.validation")]
    Validation(Vec<FieldError>),
    #[error("product.image_format")]
    ImageFormat,
    #[error("storage.write_failed")]
    Storage(#[from] crate::domain::errors::StorageError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Field errors carried by a validation failure, empty for every other kind.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ProductError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

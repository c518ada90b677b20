use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            ProductError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.validation",
            ),
            ProductError::ImageFormat => (
                StatusCode::BAD_REQUEST,
                "ImageFormatError",
                "product.image_format",
            ),
            ProductError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "storage.write_failed",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        let mut response = ErrorResponse::new(name, message);
        if let ProductError::Validation(errors) = &self {
            response.fields = Some(errors.iter().map(FieldErrorResponse::from).collect());
        }

        (status, Json(response))
    }
}

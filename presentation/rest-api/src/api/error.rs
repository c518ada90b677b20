use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::product::errors::FieldError;

#[derive(Object, Debug, Clone)]
pub struct FieldErrorResponse {
    /// Name of the rejected form field
    pub field: String,
    /// Error code for the field
    pub code: String,
}

impl From<&FieldError> for FieldErrorResponse {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.to_string(),
            code: error.code.to_string(),
        }
    }
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field failures, present on validation errors
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: None,
        }
    }

    pub fn invalid_id() -> Self {
        Self::new("ValidationError", "product.invalid_id")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

use uuid::Uuid;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::{FieldError, ProductError};
use crate::domain::product::form::FIELD_CATEGORY_ID;
use crate::domain::product::image::ImageUpload;
use crate::domain::product::services::ImageStorage;

/// Decodes the optional upload; a blank payload means no new image.
pub(crate) fn decode_upload(
    image_base64: Option<&str>,
) -> Result<Option<ImageUpload>, ProductError> {
    image_base64
        .filter(|encoded| !encoded.trim().is_empty())
        .map(ImageUpload::from_base64)
        .transpose()
}

pub(crate) async fn store_upload(
    storage: &dyn ImageStorage,
    upload: Option<ImageUpload>,
) -> Result<Option<String>, ProductError> {
    match upload {
        Some(upload) => {
            let reference = storage
                .store(upload.bytes(), upload.format().extension())
                .await?;
            Ok(Some(reference))
        }
        None => Ok(None),
    }
}

/// Rejects a submitted `category_id` that does not match a stored category.
pub(crate) async fn ensure_category_exists(
    repository: &dyn CategoryRepository,
    category_id: Uuid,
) -> Result<(), ProductError> {
    match repository.get_by_id(category_id).await {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ProductError::Validation(vec![FieldError::new(
            FIELD_CATEGORY_ID,
            "product.category_not_found",
        )])),
        Err(other) => Err(ProductError::Repository(other)),
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use super::shared::{decode_upload, ensure_category_exists, store_upload};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorage;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.form.name.as_deref().unwrap_or_default()
        ));

        let fields = params.form.validate()?;
        let upload = decode_upload(params.image_base64.as_deref())?;
        ensure_category_exists(self.category_repository.as_ref(), fields.category_id).await?;

        let image = store_upload(self.image_storage.as_ref(), upload).await?;
        let product = Product::new(NewProductProps { fields, image });

        // The image file is already written; a failed save leaves it behind.
        if let Err(e) = self.repository.save(&product).await {
            if let Some(image) = &product.image {
                self.logger
                    .warn(&format!("Stored image {} has no product after failed save", image));
            }
            return Err(e.into());
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

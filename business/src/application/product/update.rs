use std::sync::Arc;

use async_trait::async_trait;

use super::shared::{decode_upload, ensure_category_exists, store_upload};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorage;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let fields = params.form.validate()?;
        let upload = decode_upload(params.image_base64.as_deref())?;
        ensure_category_exists(self.category_repository.as_ref(), fields.category_id).await?;

        let new_image = store_upload(self.image_storage.as_ref(), upload).await?;
        let replaced = new_image.is_some();
        product.apply_changes(fields, new_image);

        // A new image file is already written; a failed save leaves it behind.
        if let Err(e) = self.repository.save(&product).await {
            if let Some(image) = product.image.as_deref().filter(|_| replaced) {
                self.logger
                    .warn(&format!("Stored image {} has no product after failed save", image));
            }
            return Err(e.into());
        }

        if replaced {
            self.logger.debug(&format!(
                "Product {} image replaced with {}",
                product.id,
                product.image.as_deref().unwrap_or_default()
            ));
        }
        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        BEVERAGES, MockCategoryRepo, MockLog, MockProductRepo, MockStorage, SNACKS, category,
        form, mock_logger, png_base64, product,
    };
    use crate::domain::product::form::ProductForm;
    use uuid::Uuid;

    fn categories() -> MockCategoryRepo {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_by_id()
            .returning(|id| Ok(category(id.as_u128())));
        mock_categories
    }

    #[tokio::test]
    async fn should_keep_existing_image_when_no_new_image_given() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(product(1, BEVERAGES, true)));
        mock_repo
            .expect_save()
            .withf(|p| p.image.as_deref() == Some("1718000000-0a1b2c3d.jpg"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories()),
            image_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: Uuid::from_u128(1),
                form: form(SNACKS),
                image_base64: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Filter Coffee");
        assert_eq!(updated.category_id, Uuid::from_u128(SNACKS));
        assert_eq!(updated.image.as_deref(), Some("1718000000-0a1b2c3d.jpg"));
        assert!(updated.is_pinned);
    }

    #[tokio::test]
    async fn should_replace_image_when_new_image_given() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(product(1, BEVERAGES, false)));
        mock_repo.expect_save().returning(|_| Ok(()));
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_store()
            .times(1)
            .returning(|_, _| Ok("1718000500-ffee0011.png".to_string()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories()),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: Uuid::from_u128(1),
                form: form(BEVERAGES),
                image_base64: Some(png_base64()),
            })
            .await
            .unwrap();

        assert_eq!(updated.image.as_deref(), Some("1718000500-ffee0011.png"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            image_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::now_v7(),
                form: form(BEVERAGES),
                image_base64: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_update_when_price_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(product(1, BEVERAGES, false)));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            image_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::from_u128(1),
                form: ProductForm {
                    price: None,
                    ..form(BEVERAGES)
                },
                image_base64: None,
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.field_errors()[0].field, "price");
    }

    #[tokio::test]
    async fn should_warn_about_stored_image_when_save_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(product(1, BEVERAGES, false)));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_store()
            .returning(|_, _| Ok("1718000500-ffee0011.png".to_string()));
        let mut mock_log = MockLog::new();
        mock_log.expect_info().returning(|_| ());
        mock_log
            .expect_warn()
            .withf(|message| message.contains("1718000500-ffee0011.png"))
            .times(1)
            .returning(|_| ());

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories()),
            image_storage: Arc::new(mock_storage),
            logger: Arc::new(mock_log),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::from_u128(1),
                form: form(BEVERAGES),
                image_base64: Some(png_base64()),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Persistence))
        ));
    }

    #[tokio::test]
    async fn should_not_warn_when_save_fails_without_new_image() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(product(1, BEVERAGES, false)));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut mock_log = MockLog::new();
        mock_log.expect_info().returning(|_| ());
        mock_log.expect_warn().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories()),
            image_storage: Arc::new(MockStorage::new()),
            logger: Arc::new(mock_log),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::from_u128(1),
                form: form(BEVERAGES),
                image_base64: None,
            })
            .await;

        assert!(result.is_err());
    }
}

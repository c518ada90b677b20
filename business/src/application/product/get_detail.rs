use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::select_related;
use crate::domain::product::model::{ProductDetail, ProductWithCategory};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};

pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, ProductError> {
        self.logger
            .info(&format!("Fetching product detail: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let category = self
            .category_repository
            .get_by_id(product.category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        let siblings = self
            .repository
            .get_by_category(product.category_id)
            .await?;
        let related_products = select_related(&product, siblings);

        self.logger.debug(&format!(
            "Product {} has {} related products",
            product.id,
            related_products.len()
        ));

        Ok(ProductDetail {
            product: ProductWithCategory { product, category },
            related_products,
        })
    }
}

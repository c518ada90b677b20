use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_pin::{TogglePinParams, TogglePinUseCase};

/// Flips the pin flag with a read then a save. Concurrent toggles on the
/// same product are last-write-wins.
pub struct TogglePinUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TogglePinUseCase for TogglePinUseCaseImpl {
    async fn execute(&self, params: TogglePinParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Toggling pin for product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.toggle_pin();
        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product {} is now {}",
            product.id,
            if product.is_pinned { "pinned" } else { "unpinned" }
        ));
        Ok(product)
    }
}

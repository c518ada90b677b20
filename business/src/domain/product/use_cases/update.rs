use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub form: ProductForm,
    /// Replaces the stored image when present; otherwise the current one is kept.
    pub image_base64: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}

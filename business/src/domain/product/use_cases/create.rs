use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub form: ProductForm,
    /// Base64 image payload, optionally as a `data:` URL.
    pub image_base64: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}

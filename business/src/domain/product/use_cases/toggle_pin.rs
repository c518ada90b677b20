use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct TogglePinParams {
    pub id: Uuid,
}

#[async_trait]
pub trait TogglePinUseCase: Send + Sync {
    async fn execute(&self, params: TogglePinParams) -> Result<Product, ProductError>;
}

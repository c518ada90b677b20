use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetail;

pub struct GetProductDetailParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, ProductError>;
}

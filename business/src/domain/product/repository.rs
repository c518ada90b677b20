use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductWithCategory};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product joined with its category, in no particular order.
    async fn get_all(&self) -> Result<Vec<ProductWithCategory>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

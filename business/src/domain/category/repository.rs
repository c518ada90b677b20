use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by name.
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
}

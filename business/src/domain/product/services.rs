use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Service port for persisting uploaded product images.
///
/// Returns the reference recorded as `Product::image`.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StorageError>;
}

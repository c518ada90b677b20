use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::io::AsyncWriteExt;

use business::domain::errors::StorageError;
use business::domain::product::services::ImageStorage;

/// Writes uploaded images into a local directory served as static files.
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<unix seconds>-<8 hex chars>.<extension>`
    fn generate_file_name(extension: &str) -> String {
        let suffix: u32 = rand::rng().random();
        format!("{}-{:08x}.{}", Utc::now().timestamp(), suffix, extension)
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            tracing::error!("cannot create image directory {}: {}", self.root.display(), e);
            StorageError::Unavailable
        })?;

        let file_name = Self::generate_file_name(extension);
        let path = self.root.join(&file_name);

        // create_new: never overwrite an earlier upload
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                tracing::error!("cannot create image file {}: {}", path.display(), e);
                StorageError::WriteFailed
            })?;
        file.write_all(bytes).await.map_err(|e| {
            tracing::error!("cannot write image file {}: {}", path.display(), e);
            StorageError::WriteFailed
        })?;
        file.flush().await.map_err(|_| StorageError::WriteFailed)?;

        tracing::debug!("stored image {} ({} bytes)", file_name, bytes.len());
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_write_bytes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let name = storage.store(b"\x89PNG\r\n\x1a\n", "png").await.unwrap();

        assert!(name.ends_with(".png"));
        let written = std::fs::read(dir.path().join(&name)).unwrap();
        assert_eq!(written, b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn should_create_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().join("public").join("products"));

        let name = storage.store(b"\xFF\xD8\xFF", "jpg").await.unwrap();

        assert!(storage.root().join(name).exists());
    }

    #[tokio::test]
    async fn should_generate_distinct_names_for_consecutive_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let first = storage.store(b"one", "webp").await.unwrap();
        let second = storage.store(b"two", "webp").await.unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn should_prefix_file_name_with_timestamp() {
        let name = LocalImageStorage::generate_file_name("jpg");

        let (timestamp, rest) = name.split_once('-').unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(rest.len(), "0a1b2c3d.jpg".len());
    }
}

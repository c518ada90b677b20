use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::{RepositoryError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::{Product, ProductWithCategory};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorage;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<ProductWithCategory>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl ImageStorage for Storage {
        async fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StorageError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub const BEVERAGES: u128 = 900;
pub const SNACKS: u128 = 901;

pub fn category(id: u128) -> Category {
    let name = if id == SNACKS { "Snacks" } else { "Beverages" };
    Category::from_repository(Uuid::from_u128(id), name.to_string())
}

pub fn product(id: u128, category_id: u128, is_pinned: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        Uuid::from_u128(id),
        format!("Product {id}"),
        BigDecimal::from(120),
        Some("House blend".to_string()),
        Uuid::from_u128(category_id),
        Some("1718000000-0a1b2c3d.jpg".to_string()),
        is_pinned,
        now,
        now,
    )
}

pub fn form(category_id: u128) -> ProductForm {
    ProductForm {
        name: Some("Filter Coffee".to_string()),
        price: Some("349.99".to_string()),
        details: Some("Chicory blend".to_string()),
        category_id: Some(Uuid::from_u128(category_id).to_string()),
    }
}

/// Base64 of a minimal PNG header, enough for format detection.
pub fn png_base64() -> String {
    "iVBORw0KGgoAAAANSUhEUg==".to_string()
}

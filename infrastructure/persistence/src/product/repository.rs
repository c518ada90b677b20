use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductWithCategory};
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, ProductWithCategoryEntity};

const PRODUCT_COLUMNS: &str =
    "id, name, price, details, category_id, image, is_pinned, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("product query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ProductWithCategory>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductWithCategoryEntity>(
            r#"SELECT p.id, p.name, p.price, p.details, p.category_id, p.image, p.is_pinned,
                p.created_at, p.updated_at, c.name AS category_name
            FROM products p
            INNER JOIN categories c ON c.id = p.category_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, price, details, category_id, image, is_pinned, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                details = EXCLUDED.details,
                category_id = EXCLUDED.category_id,
                image = EXCLUDED.image,
                is_pinned = EXCLUDED.is_pinned,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.price)
        .bind(&product.details)
        .bind(product.category_id)
        .bind(&product.image)
        .bind(product.is_pinned)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to save product {}: {}", product.id, e);
            RepositoryError::Persistence
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

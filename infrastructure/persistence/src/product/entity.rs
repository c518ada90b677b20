use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::product::model::{Product, ProductWithCategory};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub details: Option<String>,
    pub category_id: Uuid,
    pub image: Option<String>,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.details,
            self.category_id,
            self.image,
            self.is_pinned,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Row of the products/categories join.
#[derive(Debug, FromRow)]
pub struct ProductWithCategoryEntity {
    #[sqlx(flatten)]
    pub product: ProductEntity,
    pub category_name: String,
}

impl ProductWithCategoryEntity {
    pub fn into_domain(self) -> ProductWithCategory {
        let category = Category::from_repository(self.product.category_id, self.category_name);
        ProductWithCategory {
            product: self.product.into_domain(),
            category,
        }
    }
}

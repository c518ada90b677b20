use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::form::ProductFields;
use crate::domain::category::model::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub details: Option<String>,
    pub category_id: Uuid,
    /// Reference returned by the image storage, if a picture was uploaded.
    pub image: Option<String>,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub fields: ProductFields,
    pub image: Option<String>,
}

impl Product {
    /// Creates an unpinned product from validated fields.
    ///
    /// Ids are UUID v7 so that ascending id order follows creation order.
    pub fn new(props: NewProductProps) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: props.fields.name,
            price: props.fields.price,
            details: props.fields.details,
            category_id: props.fields.category_id,
            image: props.image,
            is_pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: BigDecimal,
        details: Option<String>,
        category_id: Uuid,
        image: Option<String>,
        is_pinned: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            details,
            category_id,
            image,
            is_pinned,
            created_at,
            updated_at,
        }
    }

    /// Overwrites the editable fields. The stored image is only replaced
    /// when a new one is given; the pin flag is left alone.
    pub fn apply_changes(&mut self, fields: ProductFields, new_image: Option<String>) {
        self.name = fields.name;
        self.price = fields.price;
        self.details = fields.details;
        self.category_id = fields.category_id;
        if let Some(image) = new_image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }

    pub fn toggle_pin(&mut self) {
        self.is_pinned = !self.is_pinned;
        self.updated_at = Utc::now();
    }
}

/// A product joined with the category it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Category,
}

/// Everything the storefront detail page shows for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: ProductWithCategory,
    pub related_products: Vec<Product>,
}

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::form::ProductForm;
use business::domain::product::model::{Product, ProductWithCategory};

use crate::api::category::dto::CategoryResponse;
use crate::api::format::{badge, plain_price};
use crate::config::display_config::DisplayConfig;

/// Create and update share one form. Required fields are optional here so
/// that a missing field comes back as a field error instead of a parse error.
#[derive(Debug, Clone, Object)]
pub struct ProductFormRequest {
    /// Product name (required)
    pub name: Option<String>,
    /// Price as a decimal string, e.g. "249.00" (required, not negative)
    pub price: Option<String>,
    /// Free text description
    pub details: Option<String>,
    /// Category identifier (required)
    pub category_id: Option<String>,
    /// Base64 jpg, png or webp image, optionally as a data URL.
    /// On update, omit it to keep the current image.
    pub image_base64: Option<String>,
}

impl ProductFormRequest {
    pub fn into_parts(self) -> (ProductForm, Option<String>) {
        let form = ProductForm {
            name: self.name,
            price: self.price,
            details: self.details,
            category_id: self.category_id,
        };
        (form, self.image_base64)
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Price with two decimals, no currency symbol
    pub price: String,
    /// Full description
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
    /// Category identifier
    pub category_id: String,
    /// Stored image reference
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// URL the stored image is served from
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Whether the product is pinned to the top of listings
    pub is_pinned: bool,
    /// "PINNED" for pinned products
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn from_domain(product: Product, display: &DisplayConfig) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: plain_price(&product.price),
            details: product.details,
            category_id: product.category_id.to_string(),
            image_url: product.image.as_deref().map(|i| display.image_url(i)),
            image: product.image,
            is_pinned: product.is_pinned,
            badge: badge(product.is_pinned),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Admin panel row: the product with its category.
#[derive(Debug, Clone, Object)]
pub struct AdminProductResponse {
    pub product: ProductResponse,
    pub category: CategoryResponse,
}

impl AdminProductResponse {
    pub fn from_domain(entry: ProductWithCategory, display: &DisplayConfig) -> Self {
        Self {
            product: ProductResponse::from_domain(entry.product, display),
            category: entry.category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::category::model::Category;
    use std::str::FromStr;
    use uuid::Uuid;

    fn display() -> DisplayConfig {
        DisplayConfig {
            currency_symbol: "₹".to_string(),
            image_public_path: "/media".to_string(),
        }
    }

    fn product(is_pinned: bool, image: Option<&str>) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::now_v7(),
            "Darjeeling First Flush".to_string(),
            BigDecimal::from_str("1250.5").unwrap(),
            None,
            Uuid::now_v7(),
            image.map(str::to_string),
            is_pinned,
            now,
            now,
        )
    }

    #[test]
    fn should_mark_pinned_product_in_admin_row() {
        let p = product(true, Some("1718000000-0a1b2c3d.webp"));
        let category = Category::from_repository(p.category_id, "Tea".to_string());

        let row = AdminProductResponse::from_domain(
            ProductWithCategory {
                product: p,
                category,
            },
            &display(),
        );

        assert_eq!(row.product.badge.as_deref(), Some("PINNED"));
        assert_eq!(row.product.price, "1250.50");
        assert_eq!(
            row.product.image_url.as_deref(),
            Some("/media/1718000000-0a1b2c3d.webp")
        );
        assert_eq!(row.category.name, "Tea");
    }

    #[test]
    fn should_omit_image_url_when_product_has_no_image() {
        let response = ProductResponse::from_domain(product(false, None), &display());

        assert!(response.image_url.is_none());
        assert!(response.badge.is_none());
    }

    #[test]
    fn should_split_request_into_form_and_image() {
        let request = ProductFormRequest {
            name: Some("Assam CTC".to_string()),
            price: Some("180".to_string()),
            details: None,
            category_id: None,
            image_base64: Some("iVBORw0KGgo=".to_string()),
        };

        let (form, image) = request.into_parts();

        assert_eq!(form.name.as_deref(), Some("Assam CTC"));
        assert!(form.category_id.is_none());
        assert_eq!(image.as_deref(), Some("iVBORw0KGgo="));
    }
}

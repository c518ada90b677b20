use poem_openapi::Object;

use business::domain::product::model::{Product, ProductDetail, ProductWithCategory};

use crate::api::format::{DETAILS_EXCERPT_CHARS, badge, excerpt};
use crate::config::display_config::DisplayConfig;

/// One product on the storefront listing.
#[derive(Debug, Clone, Object)]
pub struct StorefrontProductCard {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub category_name: Option<String>,
    /// Details cut for list display
    #[oai(skip_serializing_if_is_none)]
    pub details_excerpt: Option<String>,
    /// Price with currency symbol, e.g. "₹1,234.50"
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub is_pinned: bool,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
}

impl StorefrontProductCard {
    pub fn from_listing(entry: ProductWithCategory, display: &DisplayConfig) -> Self {
        let mut card = Self::from_product(entry.product, display);
        card.category_name = Some(entry.category.name);
        card
    }

    /// Card without a category name; the caller fills it in when known.
    pub fn from_product(product: Product, display: &DisplayConfig) -> Self {
        Self {
            id: product.id.to_string(),
            price: display.price(&product.price),
            details_excerpt: product
                .details
                .as_deref()
                .map(|d| excerpt(d, DETAILS_EXCERPT_CHARS)),
            image_url: product.image.as_deref().map(|i| display.image_url(i)),
            name: product.name,
            category_name: None,
            is_pinned: product.is_pinned,
            badge: badge(product.is_pinned),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StorefrontProductDetailResponse {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category_name: String,
    /// Full, untruncated details
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub is_pinned: bool,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    /// Other products of the same category
    pub related_products: Vec<StorefrontProductCard>,
}

impl StorefrontProductDetailResponse {
    pub fn from_domain(detail: ProductDetail, display: &DisplayConfig) -> Self {
        let ProductWithCategory { product, category } = detail.product;
        let category_name = category.name;

        Self {
            id: product.id.to_string(),
            category_id: product.category_id.to_string(),
            price: display.price(&product.price),
            image_url: product.image.as_deref().map(|i| display.image_url(i)),
            name: product.name,
            details: product.details,
            is_pinned: product.is_pinned,
            badge: badge(product.is_pinned),
            related_products: detail
                .related_products
                .into_iter()
                .map(|p| {
                    let mut card = StorefrontProductCard::from_product(p, display);
                    card.category_name = Some(category_name.clone());
                    card
                })
                .collect(),
            category_name,
        }
    }
}

use std::env;

use bigdecimal::BigDecimal;

use crate::api::format::format_price;

/// Rendering conventions shared by the admin and storefront responses.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub image_public_path: String,
}

impl DisplayConfig {
    /// Environment variables:
    /// - CURRENCY_SYMBOL: Symbol prefixed to storefront prices (default: "₹")
    pub fn from_env(image_public_path: String) -> Self {
        Self {
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "₹".to_string()),
            image_public_path,
        }
    }

    pub fn image_url(&self, image: &str) -> String {
        format!("{}/{}", self.image_public_path, image)
    }

    pub fn price(&self, price: &BigDecimal) -> String {
        format_price(&self.currency_symbol, price)
    }
}

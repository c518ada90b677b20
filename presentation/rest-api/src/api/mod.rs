pub mod category;
pub mod error;
pub mod format;
pub mod health;
pub mod product;
pub mod storefront;
pub mod tags;

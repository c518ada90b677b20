use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Catalog management for the admin panel
    AdminProducts,
    /// Public product listing and detail pages
    Storefront,
    Categories,
}

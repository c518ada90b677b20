use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    /// Category label
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
        }
    }
}

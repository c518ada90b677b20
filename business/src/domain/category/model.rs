use uuid::Uuid;

/// A product category. Categories are seeded outside the catalog and only read here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn from_repository(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}

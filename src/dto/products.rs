use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::product::Product;
use crate::dto::categories::CategoryDto;

/// Product as exposed over the API, with categories populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub categories: Vec<CategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.into_inner(),
            quantity: value.quantity.get(),
            categories: value.categories.into_iter().map(Into::into).collect(),
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

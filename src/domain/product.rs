use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, CategoryName, ProductDescription, ProductId, ProductName, ProductNameKey,
    ProductQuantity,
};

/// Category reference resolved to its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: CategoryName,
}

/// A stocked product with its categories populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: ProductDescription,
    pub quantity: ProductQuantity,
    /// Categories in the order they were submitted.
    pub categories: Vec<CategoryRef>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated data required to insert a new [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: ProductDescription,
    pub quantity: ProductQuantity,
    pub categories: Vec<CategoryId>,
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Key used to enforce case and whitespace insensitive name uniqueness.
    pub fn name_key(&self) -> ProductNameKey {
        ProductNameKey::from(&self.name)
    }
}

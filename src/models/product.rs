use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{CategoryRef, NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductDescription, ProductName, ProductQuantity, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub name_key: String,
    pub name_folded: String,
    pub description: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Builds the domain product from the row and its resolved categories.
    pub fn into_domain(
        self,
        categories: Vec<CategoryRef>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            name: ProductName::new(self.name)?,
            description: ProductDescription::new(self.description)?,
            quantity: ProductQuantity::new(self.quantity)?,
            categories,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub name_key: String,
    /// Lower-cased name searched with `LIKE`, which only folds ASCII itself.
    pub name_folded: String,
    pub description: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&DomainNewProduct> for NewProduct {
    fn from(product: &DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str().to_string(),
            name_key: product.name_key().into_inner(),
            name_folded: product.name.to_lowercase(),
            description: product.description.as_str().to_string(),
            quantity: product.quantity.get(),
            created_at: product.created_at,
            updated_at: product.created_at,
        }
    }
}

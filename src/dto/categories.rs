use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::product::CategoryRef;

/// Category as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}

impl From<CategoryRef> for CategoryDto {
    fn from(value: CategoryRef) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}

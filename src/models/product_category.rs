use diesel::prelude::*;

/// Link between a product and one of its categories.
///
/// `position` preserves the order in which categories were submitted.
#[derive(Debug, Clone, Insertable, Queryable)]
#[diesel(table_name = crate::schema::product_categories)]
pub struct ProductCategory {
    pub product_id: i32,
    pub category_id: i32,
    pub position: i32,
}

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::product::{CategoryRef, NewProduct, Product};
use crate::domain::types::{CategoryName, ProductId, ProductNameKey};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::models::product_category::ProductCategory;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, SortField, SortOrder,
};

/// Wraps `search` in `%` wildcards, escaping LIKE metacharacters with `\`.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Resolve the category references of `rows`, keeping submission order.
///
/// References to categories that no longer exist are dropped.
fn populate(conn: &mut SqliteConnection, rows: Vec<DbProduct>) -> RepositoryResult<Vec<Product>> {
    use crate::schema::{categories, product_categories};

    if rows.is_empty() {
        return Ok(vec![]);
    }

    let ids: Vec<i32> = rows.iter().map(|p| p.id).collect();

    let links: Vec<(i32, i32, String)> = product_categories::table
        .inner_join(categories::table)
        .filter(product_categories::product_id.eq_any(ids))
        .order((
            product_categories::product_id.asc(),
            product_categories::position.asc(),
        ))
        .select((
            product_categories::product_id,
            categories::id,
            categories::name,
        ))
        .load(conn)?;

    let mut by_product: HashMap<i32, Vec<CategoryRef>> = HashMap::new();
    for (product_id, category_id, name) in links {
        by_product.entry(product_id).or_default().push(CategoryRef {
            id: category_id.try_into()?,
            name: CategoryName::new(name)?,
        });
    }

    rows.into_iter()
        .map(|row| {
            let categories = by_product.remove(&row.id).unwrap_or_default();
            Ok(row.into_domain(categories)?)
        })
        .collect()
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        let pattern = query
            .search
            .as_deref()
            .map(|search| like_pattern(&search.to_lowercase()));
        let category_ids: Option<Vec<i32>> = query
            .categories
            .as_ref()
            .map(|ids| ids.iter().map(|id| id.get()).collect());

        let query_builder = || {
            let mut items = products::table.into_boxed::<Sqlite>();

            if let Some(pattern) = &pattern {
                items = items.filter(products::name_folded.like(pattern.clone()).escape('\\'));
            }

            if let Some(category_ids) = &category_ids {
                items = items.filter(
                    products::id.eq_any(
                        product_categories::table
                            .filter(product_categories::category_id.eq_any(category_ids.clone()))
                            .select(product_categories::product_id),
                    ),
                );
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        // `id` breaks ties so pages stay stable.
        items = match (query.sort_field, query.sort_order) {
            (SortField::CreatedAt, SortOrder::Asc) => {
                items.order((products::created_at.asc(), products::id.asc()))
            }
            (SortField::CreatedAt, SortOrder::Desc) => {
                items.order((products::created_at.desc(), products::id.desc()))
            }
            (SortField::UpdatedAt, SortOrder::Asc) => {
                items.order((products::updated_at.asc(), products::id.asc()))
            }
            (SortField::UpdatedAt, SortOrder::Desc) => {
                items.order((products::updated_at.desc(), products::id.desc()))
            }
            (SortField::Name, SortOrder::Asc) => {
                items.order((products::name.asc(), products::id.asc()))
            }
            (SortField::Name, SortOrder::Desc) => {
                items.order((products::name.desc(), products::id.desc()))
            }
            (SortField::Quantity, SortOrder::Asc) => {
                items.order((products::quantity.asc(), products::id.asc()))
            }
            (SortField::Quantity, SortOrder::Desc) => {
                items.order((products::quantity.desc(), products::id.desc()))
            }
        };

        // Apply pagination if requested
        if let Some(pagination) = &query.pagination {
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbProduct>(&mut conn)?;
        let items = populate(&mut conn, rows)?;

        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(populate(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn find_product_by_name_key(&self, key: &ProductNameKey) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::name_key.eq(key.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(populate(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;
        let db_product = DbNewProduct::from(product);

        let mut created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(products::table)
                .values(&db_product)
                .get_result::<DbProduct>(conn)?;

            let links: Vec<ProductCategory> = product
                .categories
                .iter()
                .enumerate()
                .map(|(position, category_id)| ProductCategory {
                    product_id: row.id,
                    category_id: category_id.get(),
                    position: position as i32,
                })
                .collect();

            if !links.is_empty() {
                diesel::insert_into(product_categories::table)
                    .values(&links)
                    .execute(conn)?;
            }

            populate(conn, vec![row])
        })?;

        created
            .pop()
            .ok_or(RepositoryError::Database(DieselError::NotFound))
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                product_categories::table.filter(product_categories::product_id.eq(id.get())),
            )
            .execute(conn)?;

            Ok(diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(conn)?)
        })?;

        Ok(affected)
    }

    fn delete_all_products(&self) -> RepositoryResult<usize> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(product_categories::table).execute(conn)?;
            Ok(diesel::delete(products::table).execute(conn)?)
        })?;

        Ok(affected)
    }
}

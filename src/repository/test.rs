use std::sync::Mutex;

use chrono::{DateTime, NaiveDateTime};

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{CategoryRef, NewProduct, Product};
use crate::domain::types::{
    CategoryId, CategoryName, ProductDescription, ProductId, ProductName, ProductNameKey,
    ProductQuantity,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategoryWriter, ProductListQuery, ProductReader, ProductWriter, SortField,
    SortOrder,
};

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    products: Vec<Product>,
    next_category_id: i32,
    next_product_id: i32,
}

/// Simple in-memory repository used for unit tests.
///
/// Mirrors the behaviour of the Diesel repository, including the unique
/// normalized-name constraint on products.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
    fail: bool,
    stale_name_lookups: bool,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let next_category_id = categories.iter().map(|c| c.id.get()).max().unwrap_or(0);
        let next_product_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self {
            state: Mutex::new(State {
                categories,
                products,
                next_category_id,
                next_product_id,
            }),
            fail: false,
            stale_name_lookups: false,
        }
    }

    /// Name lookups miss while inserts still enforce the unique key, as when
    /// another request creates the same product between check and insert.
    pub fn with_stale_name_lookups(mut self) -> Self {
        self.stale_name_lookups = true;
        self
    }

    /// Repository whose every call fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn product_count(&self) -> usize {
        self.state.lock().unwrap().products.len()
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.fail {
            Err(RepositoryError::Database(
                diesel::result::Error::BrokenTransactionManager,
            ))
        } else {
            Ok(())
        }
    }
}

/// Timestamp `seconds` after the epoch, for deterministic fixtures.
pub fn timestamp(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
}

pub fn sample_category(id: i32, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        created_at: timestamp(0),
        updated_at: timestamp(0),
    }
}

/// Product created `id` seconds after the epoch, so higher ids are newer.
pub fn sample_product(id: i32, name: &str, categories: &[&Category]) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        name: ProductName::new(name).unwrap(),
        description: ProductDescription::new(format!("{name} description")).unwrap(),
        quantity: ProductQuantity::new(id).unwrap(),
        categories: categories
            .iter()
            .map(|c| CategoryRef {
                id: c.id,
                name: c.name.clone(),
            })
            .collect(),
        created_at: timestamp(i64::from(id)),
        updated_at: timestamp(i64::from(id)),
    }
}

/// `true` if `product` references any of `ids`.
fn in_any_category(product: &Product, ids: &[CategoryId]) -> bool {
    product.categories.iter().any(|c| ids.contains(&c.id))
}

impl ProductReader for TestRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        self.check()?;
        let state = self.state.lock().unwrap();

        let mut items: Vec<Product> = state.products.clone();
        if let Some(search) = &query.search {
            let search = search.to_lowercase();
            items.retain(|p| p.name.to_lowercase().contains(&search));
        }
        if let Some(categories) = &query.categories {
            items.retain(|p| in_any_category(p, categories));
        }

        items.sort_by(|a, b| {
            let ordering = match query.sort_field {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                SortField::Name => a.name.cmp(&b.name),
                SortField::Quantity => a.quantity.cmp(&b.quantity),
            }
            .then(a.id.cmp(&b.id));
            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = items.len();
        if let Some(pagination) = &query.pagination {
            items = items
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .collect();
        }
        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    fn find_product_by_name_key(&self, key: &ProductNameKey) -> RepositoryResult<Option<Product>> {
        self.check()?;
        if self.stale_name_lookups {
            return Ok(None);
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .products
            .iter()
            .find(|p| ProductNameKey::from(&p.name) == *key)
            .cloned())
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        self.check()?;
        let mut state = self.state.lock().unwrap();

        let key = product.name_key();
        if state
            .products
            .iter()
            .any(|p| ProductNameKey::from(&p.name) == key)
        {
            return Err(RepositoryError::UniqueViolation(
                "UNIQUE constraint failed: products.name_key".to_string(),
            ));
        }

        let categories = product
            .categories
            .iter()
            .filter_map(|id| state.categories.iter().find(|c| c.id == *id))
            .map(|c| CategoryRef {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();

        state.next_product_id += 1;
        let created = Product {
            id: ProductId::new(state.next_product_id)?,
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            categories,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        state.products.push(created.clone());
        Ok(created)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        Ok(before - state.products.len())
    }

    fn delete_all_products(&self) -> RepositoryResult<usize> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        Ok(state.products.drain(..).count())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        let mut items = state.categories.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<usize> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        for category in categories {
            state.next_category_id += 1;
            let id = CategoryId::new(state.next_category_id)?;
            state.categories.push(Category {
                id,
                name: category.name.clone(),
                created_at: category.created_at,
                updated_at: category.updated_at,
            });
        }
        Ok(categories.len())
    }

    fn delete_all_categories(&self) -> RepositoryResult<usize> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        Ok(state.categories.drain(..).count())
    }
}

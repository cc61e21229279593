//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{NaiveDateTime, TimeDelta, Utc};
use pushkind_inventory::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_inventory::domain::category::{Category, NewCategory};
use pushkind_inventory::domain::product::{NewProduct, Product};
use pushkind_inventory::domain::types::{
    CategoryId, CategoryName, ProductDescription, ProductName, ProductQuantity,
};
use pushkind_inventory::repository::{
    CategoryReader, CategoryWriter, DieselRepository, ProductWriter,
};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Inserts categories with the given names and returns them ordered by name.
pub fn seed_categories(repo: &DieselRepository, names: &[&str]) -> Vec<Category> {
    let now = Utc::now().naive_utc();
    let categories: Vec<NewCategory> = names
        .iter()
        .map(|name| NewCategory::new(CategoryName::new(*name).unwrap(), now))
        .collect();
    repo.create_categories(&categories)
        .expect("should create categories");
    repo.list_categories().expect("should list categories")
}

/// Finds a category by name in `categories`.
pub fn category_id(categories: &[Category], name: &str) -> CategoryId {
    categories
        .iter()
        .find(|c| c.name.as_str() == name)
        .map(|c| c.id)
        .expect("category should exist")
}

/// Stamp `seconds` after a fixed base so creation order is deterministic.
pub fn at(seconds: i64) -> NaiveDateTime {
    NaiveDateTime::default() + TimeDelta::seconds(seconds)
}

pub fn insert_product(
    repo: &DieselRepository,
    name: &str,
    quantity: i32,
    categories: Vec<CategoryId>,
    created_at: NaiveDateTime,
) -> Product {
    let product = NewProduct {
        name: ProductName::new(name).unwrap(),
        description: ProductDescription::new(format!("{name} description")).unwrap(),
        quantity: ProductQuantity::new(quantity).unwrap(),
        categories,
        created_at,
    };
    repo.create_product(&product).expect("should create product")
}

use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, ProductId, ProductNameKey};
use crate::pagination::Pagination;

pub mod category;
pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Column used to order product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Quantity,
}

impl SortField {
    /// Maps the public `sortBy` value, falling back to the creation time for
    /// anything unrecognised.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("name") => Self::Name,
            Some("quantity") => Self::Quantity,
            Some("updatedAt") => Self::UpdatedAt,
            _ => Self::CreatedAt,
        }
    }
}

/// Direction of a product listing. Descending unless ascending is requested
/// explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("asc" | "ascending" | "1") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Query parameters used when listing or searching products.
///
/// Every criterion is optional; an empty query lists everything newest
/// first.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Keep products referencing at least one of these categories.
    pub categories: Option<Vec<CategoryId>>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Blank search text is ignored.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.is_empty() {
            self.search = Some(search);
        }
        self
    }
    /// An empty set is kept as a filter and matches nothing.
    pub fn categories(mut self, categories: Vec<CategoryId>) -> Self {
        self.categories = Some(categories);
        self
    }
    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, with the total
    /// number of matches ignoring pagination.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Find the product whose normalized name equals `key`.
    fn find_product_by_name_key(&self, key: &ProductNameKey) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return it with categories populated.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Permanently remove a product, returning the number of rows removed.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
    /// Remove every product.
    fn delete_all_products(&self) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities. Only seeding uses these.
pub trait CategoryWriter {
    /// Persist new categories in one batch.
    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<usize>;
    /// Remove every category.
    fn delete_all_categories(&self) -> RepositoryResult<usize>;
}

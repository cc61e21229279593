use chrono::{NaiveDateTime, Utc};

use crate::domain::product::NewProduct;
use crate::domain::types::{CategoryId, ProductId, ProductNameKey};
use crate::dto::products::ProductDto;
use crate::forms::products::{CreateProductForm, CreateProductPayload, ProductListParams};
use crate::pagination::Paginated;
use crate::repository::{CategoryReader, ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Checks a creation payload against the stores and builds the product to
/// persist.
///
/// The name must not collide with an existing product under
/// [`ProductNameKey`] normalization. Category references are then checked one
/// at a time in submission order: each must be a valid identifier and must
/// resolve to an existing category. The first failure is returned.
///
/// Only reads are performed. The check is not atomic with the later insert;
/// the unique index on the normalized name catches the concurrent case.
pub fn validate_new_product<R>(
    payload: CreateProductPayload,
    created_at: NaiveDateTime,
    repo: &R,
) -> ServiceResult<NewProduct>
where
    R: ProductReader + CategoryReader,
{
    let key = ProductNameKey::from(&payload.name);
    match repo.find_product_by_name_key(&key) {
        Ok(Some(_)) => return Err(ServiceError::DuplicateName),
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up product by name: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let mut categories: Vec<CategoryId> = Vec::with_capacity(payload.categories.len());
    for raw in &payload.categories {
        let raw = raw.to_string();
        let category_id =
            CategoryId::parse(&raw).map_err(|_| ServiceError::InvalidCategoryId(raw.clone()))?;

        match repo.get_category_by_id(category_id) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::CategoryNotFound(raw)),
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        }

        if !categories.contains(&category_id) {
            categories.push(category_id);
        }
    }

    Ok(NewProduct {
        name: payload.name,
        description: payload.description,
        quantity: payload.quantity,
        categories,
        created_at,
    })
}

/// Validates and stores a new product, returning it with categories
/// populated.
pub fn create_product<R>(form: CreateProductForm, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader + ProductWriter + CategoryReader,
{
    let payload = CreateProductPayload::try_from(form)?;
    let new_product = validate_new_product(payload, Utc::now().naive_utc(), repo)?;

    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.name);
            Ok(product.into())
        }
        Err(RepositoryError::UniqueViolation(e)) => {
            log::warn!("Product name collided on insert: {e}");
            Err(ServiceError::DuplicateName)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Lists one page of products matching the optional search text and
/// category filter.
pub fn list_products<R>(params: ProductListParams, repo: &R) -> ServiceResult<Paginated<ProductDto>>
where
    R: ProductReader,
{
    let query = params.into_query();
    let pagination = query.pagination.unwrap_or_default();

    match repo.list_products(query) {
        Ok((total, products)) => Ok(Paginated::new(products, pagination, total).map(Into::into)),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Permanently removes the product identified by `id`.
///
/// Deleting the same product twice reports [`ServiceError::NotFound`] the
/// second time.
pub fn delete_product<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let product_id = ProductId::parse(id).map_err(|_| ServiceError::InvalidId)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_product(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted product {product_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

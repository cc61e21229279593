//! JSON envelopes shared by every endpoint.
//!
//! Each body carries a `success` flag plus either data or a message.

use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::products::ProductDto;
use crate::pagination::Paginated;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub success: bool,
    /// Number of products on this page.
    pub count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_products: usize,
    pub data: Vec<ProductDto>,
}

impl From<Paginated<ProductDto>> for ProductListResponse {
    fn from(value: Paginated<ProductDto>) -> Self {
        Self {
            success: true,
            count: value.items.len(),
            total_pages: value.total_pages,
            current_page: value.page,
            total_products: value.total,
            data: value.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<CategoryDto>,
}

impl From<Vec<CategoryDto>> for CategoryListResponse {
    fn from(value: Vec<CategoryDto>) -> Self {
        Self {
            success: true,
            count: value.len(),
            data: value,
        }
    }
}

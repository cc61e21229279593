use thiserror::Error;

/// Outcome of a failed service call.
///
/// The `Display` text of each variant is the message returned to clients, so
/// it must never carry storage details.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required creation field was absent or blank.
    #[error("Please provide all required fields")]
    MissingField,
    /// Quantity was not a non-negative whole number.
    #[error("Quantity must be a non-negative integer")]
    InvalidQuantity,
    /// Another product already uses the normalized name.
    #[error("Product with this name already exists")]
    DuplicateName,
    /// A submitted category reference is not a valid identifier.
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(String),
    /// A submitted category reference does not resolve.
    #[error("Category with ID {0} not found")]
    CategoryNotFound(String),
    /// A product identifier is malformed.
    #[error("Invalid product ID")]
    InvalidId,
    /// Requested product was not found.
    #[error("Product not found")]
    NotFound,
    /// An unexpected internal error occurred.
    #[error("Server error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

//! Error conversion glue between request parsing and the service layer.

use crate::forms::products::CreateProductFormError;
use crate::services::ServiceError;

impl From<CreateProductFormError> for ServiceError {
    fn from(val: CreateProductFormError) -> Self {
        match val {
            CreateProductFormError::MissingField(_) => ServiceError::MissingField,
            CreateProductFormError::InvalidQuantity(_) => ServiceError::InvalidQuantity,
        }
    }
}

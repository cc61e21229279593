use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::responses::MessageResponse;
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod main;
pub mod products;

/// Registers every API route together with the JSON and query extractor
/// settings they rely on.
///
/// `/products/categories` and `/products/health` are registered ahead of the
/// `/products/{id}` route so they are never taken for a product id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {err}");
        let response =
            HttpResponse::BadRequest().json(MessageResponse::failure("Invalid request body"));
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {err}");
        let response =
            HttpResponse::BadRequest().json(MessageResponse::failure("Invalid query parameters"));
        InternalError::from_response(err, response).into()
    }))
    .service(main::health)
    .service(main::products_health)
    .service(categories::list_categories)
    .service(products::list_products)
    .service(products::create_product)
    .service(products::delete_product);
}

/// Maps a service failure to its status code and message envelope.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = MessageResponse::failure(err.to_string());
    match err {
        ServiceError::MissingField
        | ServiceError::InvalidQuantity
        | ServiceError::DuplicateName
        | ServiceError::InvalidCategoryId(_)
        | ServiceError::InvalidId => HttpResponse::BadRequest().json(body),
        ServiceError::CategoryNotFound(_) | ServiceError::NotFound => {
            HttpResponse::NotFound().json(body)
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}

/// Runs a service call on actix's blocking thread pool.
pub async fn blocking<T, F>(call: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(call).await.unwrap_or_else(|e| {
        log::error!("Blocking task failed: {e}");
        Err(ServiceError::Internal)
    })
}

use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::responses::CategoryListResponse;
use crate::repository::DieselRepository;
use crate::routes::{blocking, error_response};
use crate::services::categories::list_categories as list_categories_service;

#[get("/products/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match blocking(move || list_categories_service(repo.get_ref())).await {
        Ok(categories) => HttpResponse::Ok().json(CategoryListResponse::from(categories)),
        Err(err) => error_response(&err),
    }
}

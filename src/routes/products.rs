use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::dto::responses::{DataResponse, MessageResponse, ProductListResponse};
use crate::forms::products::{CreateProductForm, ProductListParams};
use crate::repository::DieselRepository;
use crate::routes::{blocking, error_response};
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    list_products as list_products_service,
};

#[post("/products")]
pub async fn create_product(
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = form.into_inner();
    match blocking(move || create_product_service(form, repo.get_ref())).await {
        Ok(product) => HttpResponse::Created().json(DataResponse::new(product)),
        Err(err) => error_response(&err),
    }
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    match blocking(move || list_products_service(params, repo.get_ref())).await {
        Ok(page) => HttpResponse::Ok().json(ProductListResponse::from(page)),
        Err(err) => error_response(&err),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match blocking(move || delete_product_service(&id, repo.get_ref())).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::success("Product deleted successfully")),
        Err(err) => error_response(&err),
    }
}

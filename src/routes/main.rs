use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, Responder, get};

use crate::dto::responses::MessageResponse;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::success("OK"))
}

#[get("/products/health")]
pub async fn products_health() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::success("OK"))
}

/// Serves the built client from `static_dir`.
///
/// Paths with no matching file get `index.html`, so client-side routes
/// survive a page reload. Must be registered after the API routes.
pub fn client_files(static_dir: &str) -> Files {
    let index: PathBuf = [static_dir, "index.html"].iter().collect();
    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, http, web};

use pushkind_inventory::config::ServerConfig;
use pushkind_inventory::db::{establish_connection_pool, run_migrations};
use pushkind_inventory::repository::DieselRepository;
use pushkind_inventory::routes::configure;
use pushkind_inventory::routes::main::client_files;

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    let repo = web::Data::new(DieselRepository::new(pool));
    let bind_address = server_config.bind_address();
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .wrap(cors(server_config.cors_allowed_origin.as_deref()))
            .app_data(repo.clone())
            .configure(configure);

        match &server_config.static_dir {
            Some(static_dir) => app.service(client_files(static_dir)),
            None => app,
        }
    })
    .bind(bind_address)?
    .run()
    .await
}

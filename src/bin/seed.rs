//! Populates the inventory database with sample categories and products.
//!
//! ```bash
//! # Replace the catalog with the sample data
//! seed
//!
//! # Remove every product and category
//! seed --destroy
//! ```

use clap::Parser;

use pushkind_inventory::config::ServerConfig;
use pushkind_inventory::db::{establish_connection_pool, run_migrations};
use pushkind_inventory::repository::DieselRepository;
use pushkind_inventory::seed::{destroy_catalog, import_catalog};

#[derive(Parser)]
#[command(name = "seed")]
#[command(version, about = "Inventory sample data loader")]
struct Cli {
    /// Only remove existing products and categories
    #[arg(short = 'd', long)]
    destroy: bool,

    /// Database file, overriding the configured one
    #[arg(long)]
    database_url: Option<String>,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => match ServerConfig::load() {
            Ok(config) => config.database_url,
            Err(e) => {
                log::error!("Failed to load configuration: {e}");
                std::process::exit(1);
            }
        },
    };

    let pool = match establish_connection_pool(&database_url) {
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

    let repo = DieselRepository::new(pool);
    let result = if cli.destroy {
        destroy_catalog(&repo)
    } else {
        import_catalog(&repo)
    };

    match result {
        Ok(()) if cli.destroy => log::info!("Data destroyed successfully"),
        Ok(()) => log::info!("Data imported successfully"),
        Err(e) => {
            log::error!("Seeding failed: {e}");
            std::process::exit(1);
        }
    }
}

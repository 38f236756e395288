use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use jb_api::app::create_app;
use jb_api::i18n::{ResourceCatalog, ResourceLookup};
use jb_api::routes::AppState;
use jb_shared::{AppConfig, Environment, Settings};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();
    let environment = Environment::from_env();
    dotenv::from_filename(environment.env_file()).ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting JobBoard API Server ({})", environment);

    // Load configuration
    let settings = Settings::load(environment)?;
    let config = AppConfig::from_settings(&settings, environment)?;
    if config.security.jwt_secret.is_none() {
        log::warn!("security.jwt_secret is not set; authenticated routes will reject every request");
    }

    let resources: Arc<dyn ResourceLookup> =
        ResourceCatalog::load(config.localization.resources_path.as_deref())?;

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(AppState::new(config, settings, resources));

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}

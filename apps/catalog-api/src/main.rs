use axum_helpers::server::{
    CleanupCoordinator, close_postgres, create_production_app, health_router,
};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::run_migrations;
use domain_products::{PgProductRepository, ProductService};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(repository);

    // Build router with API routes
    let api_routes = api::routes(service);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual database probe
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::ready_router(db.clone()));

    info!("Starting catalog API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown and cleanup
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");

            let mut cleanup = CleanupCoordinator::new();
            cleanup.add_task("postgres", close_postgres(db, "main"));
            cleanup.run().await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}

use axum::Router;
use axum::routing::get;
use database::postgres::DatabaseConnection;
use domain_products::{ProductRepository, ProductService, handlers};

pub mod health;

/// Creates the API routes.
///
/// Returns a stateless Router (the products router has its state already
/// applied), ready to be combined with documentation and middleware by
/// the `create_router` helper.
pub fn routes<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new().nest("/products", handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint checks the database
/// connection.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

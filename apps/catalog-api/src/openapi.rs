use utoipa::OpenApi;

/// Top-level OpenAPI document for the catalog API.
///
/// Nests the products domain documentation under its route prefix and
/// registers the shared error response schema, so every documented
/// failure body points at the same component.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for managing a product catalog"
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;

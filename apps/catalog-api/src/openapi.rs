//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog seeding, search, and monthly sales aggregations backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

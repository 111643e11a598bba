//! HTTP handlers for the catalog API

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CatalogResult, ErrorResponse};
use crate::models::{
    BucketId, CategoryCount, CombinedData, InitializeResponse, MonthlyStatistics,
    PriceRangeBucket, ProductFilter, ProductView, StatsQuery,
};
use crate::repository::ProductRepository;
use crate::seed::SeedSource;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        initialize,
        list_transactions,
        monthly_statistics,
        price_range,
        categories,
        combined_data,
    ),
    components(schemas(
        ProductView,
        InitializeResponse,
        MonthlyStatistics,
        PriceRangeBucket,
        BucketId,
        CategoryCount,
        CombinedData,
        ErrorResponse,
    )),
    tags(
        (name = "Catalog", description = "Product catalog seeding, search, and monthly sales aggregations")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R, S>(service: CatalogService<R, S>) -> Router
where
    R: ProductRepository + 'static,
    S: SeedSource + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/initialize", get(initialize))
        .route("/transactions", get(list_transactions))
        .route("/statistics", get(monthly_statistics))
        .route("/price-range", get(price_range))
        .route("/categories", get(categories))
        .route("/combined-data", get(combined_data))
        .with_state(shared_service)
}

/// Seed the catalog from the upstream payload
#[utoipa::path(
    get,
    path = "/initialize",
    tag = "Catalog",
    responses(
        (status = 200, description = "Inserted products", body = InitializeResponse),
        (status = 502, description = "Upstream fetch failed", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    )
)]
async fn initialize<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
) -> CatalogResult<Json<InitializeResponse>> {
    let products = service.initialize().await?;
    Ok(Json(InitializeResponse {
        products: products.into_iter().map(ProductView::from).collect(),
    }))
}

/// List transactions with search and pagination
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Catalog",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductView>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn list_transactions<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
    Query(filter): Query<ProductFilter>,
) -> CatalogResult<Json<Vec<ProductView>>> {
    let products = service.list_transactions(filter).await?;
    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

/// Sale totals and sold/unsold counts for a month
#[utoipa::path(
    get,
    path = "/statistics",
    tag = "Catalog",
    params(StatsQuery),
    responses(
        (status = 200, description = "Monthly totals", body = MonthlyStatistics),
        (status = 400, description = "Invalid month", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn monthly_statistics<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
    Query(query): Query<StatsQuery>,
) -> CatalogResult<Json<MonthlyStatistics>> {
    let stats = service.monthly_statistics(query.month).await?;
    Ok(Json(stats))
}

/// Price-range histogram for a month
#[utoipa::path(
    get,
    path = "/price-range",
    tag = "Catalog",
    params(StatsQuery),
    responses(
        (status = 200, description = "Histogram buckets", body = Vec<PriceRangeBucket>),
        (status = 400, description = "Invalid month", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn price_range<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
    Query(query): Query<StatsQuery>,
) -> CatalogResult<Json<Vec<PriceRangeBucket>>> {
    let buckets = service.price_histogram(query.month).await?;
    Ok(Json(buckets))
}

/// Per-category counts for a month
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    params(StatsQuery),
    responses(
        (status = 200, description = "Category counts", body = Vec<CategoryCount>),
        (status = 400, description = "Invalid month", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn categories<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
    Query(query): Query<StatsQuery>,
) -> CatalogResult<Json<Vec<CategoryCount>>> {
    let counts = service.category_histogram(query.month).await?;
    Ok(Json(counts))
}

/// Combined statistics, price-range, and category view for a month
#[utoipa::path(
    get,
    path = "/combined-data",
    tag = "Catalog",
    params(StatsQuery),
    responses(
        (status = 200, description = "Merged aggregation view", body = CombinedData),
        (status = 400, description = "Invalid month", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn combined_data<R: ProductRepository, S: SeedSource>(
    State(service): State<Arc<CatalogService<R, S>>>,
    Query(query): Query<StatsQuery>,
) -> CatalogResult<Json<CombinedData>> {
    let combined = service.combined_data(query.month).await?;
    Ok(Json(combined))
}

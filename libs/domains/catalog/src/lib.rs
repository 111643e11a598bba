//! Catalog Domain
//!
//! Seeds a product catalog from a remote JSON payload into MongoDB and
//! answers search/pagination queries and monthly sales aggregations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, in-process composition
//! └──────┬──────┘
//!        │
//! ┌──────▼─────────────┐
//! │ Repository / Seed  │  ← Traits + MongoDB / HTTP implementations
//! └──────┬─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, month windows
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers, CatalogService, HttpSeedSource, MongoProductRepository, DEFAULT_SEED_URL,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = MongoProductRepository::new(&db);
//! let seed = HttpSeedSource::new(DEFAULT_SEED_URL)?;
//! let service = CatalogService::new(repository, seed);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

pub use self::error::{CatalogError, CatalogResult, ErrorResponse};
pub use self::handlers::ApiDoc;
pub use self::models::{
    BucketId, CategoryCount, CombinedData, InitializeResponse, MonthWindow, MonthlyStatistics,
    PriceRangeBucket, Product, ProductFilter, ProductView, SeedProduct, StatsQuery, SALE_YEAR,
};
pub use self::mongodb::MongoProductRepository;
pub use self::repository::ProductRepository;
pub use self::seed::{HttpSeedSource, SeedSource, DEFAULT_SEED_URL};
pub use self::service::CatalogService;

//! Catalog service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CategoryCount, CombinedData, MonthWindow, MonthlyStatistics, PriceRangeBucket, Product,
    ProductFilter,
};
use crate::repository::ProductRepository;
use crate::seed::SeedSource;

/// Service composing the repository and the seed source.
///
/// Validates inputs before touching the store, and performs the combined
/// view as in-process composition of the three aggregations rather than
/// HTTP round-trips to the service itself.
pub struct CatalogService<R: ProductRepository, S: SeedSource> {
    repository: Arc<R>,
    seed: Arc<S>,
}

impl<R: ProductRepository, S: SeedSource> CatalogService<R, S> {
    pub fn new(repository: R, seed: S) -> Self {
        Self {
            repository: Arc::new(repository),
            seed: Arc::new(seed),
        }
    }

    /// Fetch the upstream payload and bulk-insert it.
    ///
    /// No deduplication: seeding twice stores the records twice, matching
    /// the upstream contract of a one-shot initialization endpoint.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> CatalogResult<Vec<Product>> {
        let seeds = self.seed.fetch().await?;
        let products: Vec<Product> = seeds.into_iter().map(Product::from_seed).collect();
        self.repository.insert_many(products).await
    }

    /// List transactions with search and pagination
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        filter
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.list(filter).await
    }

    /// Sale totals and sold/unsold counts for a month of the sale year
    #[instrument(skip(self))]
    pub async fn monthly_statistics(&self, month: u32) -> CatalogResult<MonthlyStatistics> {
        let window = Self::sale_month(month)?;
        self.repository.monthly_statistics(window).await
    }

    /// Price-range histogram for a month of the sale year
    #[instrument(skip(self))]
    pub async fn price_histogram(&self, month: u32) -> CatalogResult<Vec<PriceRangeBucket>> {
        let window = Self::sale_month(month)?;
        self.repository.price_histogram(window).await
    }

    /// Per-category counts for a month of the sale year
    #[instrument(skip(self))]
    pub async fn category_histogram(&self, month: u32) -> CatalogResult<Vec<CategoryCount>> {
        let window = Self::sale_month(month)?;
        self.repository.category_histogram(window).await
    }

    /// Merged view of the three month-scoped aggregations.
    ///
    /// The three queries target independent data and run concurrently; any
    /// single failure fails the whole response.
    #[instrument(skip(self))]
    pub async fn combined_data(&self, month: u32) -> CatalogResult<CombinedData> {
        let window = Self::sale_month(month)?;

        let (statistics, price_range, categories) = tokio::join!(
            self.repository.monthly_statistics(window),
            self.repository.price_histogram(window),
            self.repository.category_histogram(window),
        );

        Ok(CombinedData {
            statistics: statistics?,
            price_range: price_range?,
            categories: categories?,
        })
    }

    fn sale_month(month: u32) -> CatalogResult<MonthWindow> {
        MonthWindow::for_sale_month(month).ok_or_else(|| {
            CatalogError::Validation(format!("month must be between 1 and 12, got {}", month))
        })
    }
}

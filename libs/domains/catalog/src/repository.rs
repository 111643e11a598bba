use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{
    CategoryCount, MonthWindow, MonthlyStatistics, PriceRangeBucket, Product, ProductFilter,
};

/// Repository trait for product persistence and aggregation.
///
/// The heavy lifting (pagination, regex search, histogram buckets) is
/// delegated to the backing store's query engine; implementations translate
/// the typed inputs into store queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Bulk-insert seeded products, returning the inserted set
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<Vec<Product>>;

    /// List products matching the filter, paginated, in natural store order
    async fn list(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Sale total and sold/unsold counts over a month window
    async fn monthly_statistics(&self, window: MonthWindow) -> CatalogResult<MonthlyStatistics>;

    /// Price histogram over fixed boundaries for a month window
    async fn price_histogram(&self, window: MonthWindow) -> CatalogResult<Vec<PriceRangeBucket>>;

    /// Per-category counts for a month window, store-defined order
    async fn category_histogram(&self, window: MonthWindow) -> CatalogResult<Vec<CategoryCount>>;
}

//! Upstream seed payload client.
//!
//! The remote payload is a black box: a JSON array of product records at a
//! fixed URL. The trait seam keeps it mockable in service and handler tests.

use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::SeedProduct;

/// Upstream location of the product transaction payload
pub const DEFAULT_SEED_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the seed payload
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch the full seed payload. No retry; a failed fetch is reported
    /// as-is.
    async fn fetch(&self) -> CatalogResult<Vec<SeedProduct>>;
}

/// HTTP implementation of [`SeedSource`]
pub struct HttpSeedSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    /// Client for the given payload URL with a 30s request timeout
    pub fn new(url: impl Into<String>) -> CatalogResult<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> CatalogResult<Vec<SeedProduct>> {
        let records: Vec<SeedProduct> = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(count = records.len(), "Fetched seed payload");
        Ok(records)
    }
}

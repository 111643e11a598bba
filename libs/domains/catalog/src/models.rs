use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// All sale dates in the seed payload fall in this year; month-scoped
/// aggregations are anchored to it.
pub const SALE_YEAR: i32 = 2021;

/// Default page size for transaction listings
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Product entity stored in the `products` collection.
///
/// `dateOfSale` is persisted as a native BSON datetime so the month-window
/// range queries compare instants, not strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    pub sold: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date_of_sale: DateTime<Utc>,
}

impl Product {
    /// Build a stored product from an upstream seed record.
    ///
    /// Assigns a fresh UUIDv7 id; the upstream numeric id is dropped.
    pub fn from_seed(seed: SeedProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: seed.title,
            description: seed.description,
            price: seed.price,
            category: seed.category,
            image: seed.image,
            sold: seed.sold,
            date_of_sale: seed.date_of_sale,
        }
    }
}

/// One record of the upstream seed payload.
///
/// The payload timestamps carry arbitrary UTC offsets; deserializing into
/// `DateTime<Utc>` normalizes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProduct {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

/// Product as rendered in HTTP responses (RFC 3339 timestamps).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            sold: product.sold,
            date_of_sale: product.date_of_sale,
        }
    }
}

/// Response body of the seed endpoint: the inserted records.
#[derive(Debug, Serialize, ToSchema)]
pub struct InitializeResponse {
    pub products: Vec<ProductView>,
}

/// Query parameters for the transaction listing.
///
/// `page` is 1-based. A `search` value that parses as a number filters by
/// exact price; any other value is matched as a case-insensitive substring
/// of title or description.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub search: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1))]
    pub per_page: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: None,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl ProductFilter {
    /// Number of records to skip for the requested page
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Page size as the driver expects it
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Query parameter shared by all month-scoped aggregation endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct StatsQuery {
    /// Month of the fixed sale year, 1-12
    pub month: u32,
}

/// Half-open instant interval `[start, end)` covering one month of the
/// fixed sale year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Window for a month (1-12) of [`SALE_YEAR`]; `None` out of range.
    /// December rolls over into January of the following year.
    pub fn for_sale_month(month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }

        let (end_year, end_month) = if month == 12 {
            (SALE_YEAR + 1, 1)
        } else {
            (SALE_YEAR, month + 1)
        };

        let start = Utc.with_ymd_and_hms(SALE_YEAR, month, 1, 0, 0, 0).single()?;
        let end = Utc.with_ymd_and_hms(end_year, end_month, 1, 0, 0, 0).single()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Aggregate totals for one month. Zeroed when no record matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatistics {
    pub total_sale_amount: f64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

/// `$bucket` key: either the lower price boundary or the overflow label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BucketId {
    Bound(i32),
    Label(String),
}

/// One price-range histogram entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRangeBucket {
    #[serde(rename = "_id")]
    pub id: BucketId,
    pub count: i64,
}

/// One category histogram entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub category: String,
    pub count: i64,
}

/// Merged view of the three month-scoped aggregations
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub statistics: MonthlyStatistics,
    pub price_range: Vec<PriceRangeBucket>,
    pub categories: Vec<CategoryCount>,
}

//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Bson, Document},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::{
    CategoryCount, MonthWindow, MonthlyStatistics, PriceRangeBucket, Product, ProductFilter,
};
use crate::repository::ProductRepository;

/// Lower bounds of the fixed price histogram buckets; the last bucket is
/// open-ended.
const PRICE_BOUNDS: [i32; 10] = [0, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Label for prices outside the explicit boundaries. Unreachable with an
/// infinite upper boundary, but kept so `$bucket` never aborts the pipeline.
const OVERFLOW_BUCKET: &str = "Others";

/// MongoDB-backed product repository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a repository over the default `products` collection
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>("products"),
        }
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
        }
    }

    /// Create indexes backing the month-window and price queries
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "dateOfSale": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_date_of_sale".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1, "dateOfSale": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_date".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn to_bson_datetime(dt: chrono::DateTime<chrono::Utc>) -> Bson {
        Bson::DateTime(mongodb::bson::DateTime::from_millis(dt.timestamp_millis()))
    }

    /// Filter document scoping a query to one month window
    fn month_filter(window: &MonthWindow) -> Document {
        doc! {
            "dateOfSale": {
                "$gte": Self::to_bson_datetime(window.start),
                "$lt": Self::to_bson_datetime(window.end),
            }
        }
    }

    /// Build the find filter for the transaction listing.
    ///
    /// A numeric `search` value becomes an exact price match; anything else
    /// becomes an escaped case-insensitive substring match on title or
    /// description.
    fn build_list_filter(filter: &ProductFilter) -> Document {
        let mut doc = Document::new();

        let search = match filter.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return doc,
        };

        if let Ok(price) = search.parse::<f64>() {
            doc.insert("price", price);
        } else {
            let pattern = regex::escape(search);
            doc.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": &pattern, "$options": "i" } },
                    doc! { "description": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }

        doc
    }

    /// `$bucket` boundaries: the fixed lower bounds plus an infinite upper
    /// bound so `[900, ∞)` is a real bucket.
    fn price_boundaries() -> Vec<Bson> {
        let mut boundaries: Vec<Bson> = PRICE_BOUNDS.iter().map(|b| Bson::Int32(*b)).collect();
        boundaries.push(Bson::Double(f64::INFINITY));
        boundaries
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<Vec<Product>> {
        if products.is_empty() {
            return Ok(vec![]);
        }

        self.collection.insert_many(&products).await?;

        tracing::info!(inserted = products.len(), "Seed products inserted");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let query = Self::build_list_filter(&filter);

        // Natural store order: the listing guarantees no sort.
        let options = FindOptions::builder()
            .skip(filter.skip())
            .limit(filter.limit())
            .build();

        let cursor = self.collection.find(query).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn monthly_statistics(&self, window: MonthWindow) -> CatalogResult<MonthlyStatistics> {
        let pipeline = vec![
            doc! { "$match": Self::month_filter(&window) },
            doc! { "$group": {
                "_id": Bson::Null,
                "totalSaleAmount": { "$sum": "$price" },
                "totalSoldItems": { "$sum": { "$cond": ["$sold", 1, 0] } },
                "totalNotSoldItems": { "$sum": { "$cond": ["$sold", 0, 1] } },
            }},
        ];

        let cursor = self.collection.aggregate(pipeline).await?;
        let results: Vec<Document> = cursor.try_collect().await?;

        // No matching records yields no group document; report zeros.
        match results.into_iter().next() {
            Some(group) => Ok(from_document(group)?),
            None => Ok(MonthlyStatistics::default()),
        }
    }

    #[instrument(skip(self))]
    async fn price_histogram(&self, window: MonthWindow) -> CatalogResult<Vec<PriceRangeBucket>> {
        let pipeline = vec![
            doc! { "$match": Self::month_filter(&window) },
            doc! { "$bucket": {
                "groupBy": "$price",
                "boundaries": Self::price_boundaries(),
                "default": OVERFLOW_BUCKET,
                "output": { "count": { "$sum": 1 } },
            }},
        ];

        let cursor = self.collection.aggregate(pipeline).await?;
        let results: Vec<Document> = cursor.try_collect().await?;

        results
            .into_iter()
            .map(|d| Ok(from_document(d)?))
            .collect()
    }

    #[instrument(skip(self))]
    async fn category_histogram(&self, window: MonthWindow) -> CatalogResult<Vec<CategoryCount>> {
        let pipeline = vec![
            doc! { "$match": Self::month_filter(&window) },
            doc! { "$group": {
                "_id": "$category",
                "count": { "$sum": 1 },
            }},
        ];

        let cursor = self.collection.aggregate(pipeline).await?;
        let results: Vec<Document> = cursor.try_collect().await?;

        results
            .into_iter()
            .map(|d| Ok(from_document(d)?))
            .collect()
    }
}

//! Live MongoDB tests for the repository implementation.
//!
//! Ignored by default; run against a local instance with
//! `cargo test -p domain_catalog -- --ignored`.

use chrono::{TimeZone, Utc};
use domain_catalog::{
    BucketId, MongoProductRepository, MonthWindow, Product, ProductFilter, ProductRepository,
};
use mongodb::Client;
use uuid::Uuid;

const MONGO_URL: &str = "mongodb://localhost:27017";

async fn repository(test_name: &str) -> MongoProductRepository {
    let client = Client::with_uri_str(MONGO_URL).await.unwrap();
    let db = client.database("catalog_test");
    let collection = format!("products_{}_{}", test_name, Uuid::new_v4().simple());
    MongoProductRepository::with_collection(&db, &collection)
}

fn march_fixture() -> Vec<Product> {
    vec![
        Product {
            id: Uuid::now_v7(),
            title: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: 50.0,
            category: "home".to_string(),
            image: None,
            sold: true,
            date_of_sale: Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap(),
        },
        Product {
            id: Uuid::now_v7(),
            title: "Office Chair".to_string(),
            description: "Ergonomic".to_string(),
            price: 150.0,
            category: "furniture".to_string(),
            image: None,
            sold: false,
            date_of_sale: Utc.with_ymd_and_hms(2021, 3, 20, 0, 0, 0).unwrap(),
        },
    ]
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn statistics_for_the_march_fixture() {
    let repo = repository("statistics").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let stats = repo
        .monthly_statistics(MonthWindow::for_sale_month(3).unwrap())
        .await
        .unwrap();

    assert_eq!(stats.total_sale_amount, 200.0);
    assert_eq!(stats.total_sold_items, 1);
    assert_eq!(stats.total_not_sold_items, 1);

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn statistics_for_an_empty_month_are_zero() {
    let repo = repository("empty_month").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let stats = repo
        .monthly_statistics(MonthWindow::for_sale_month(7).unwrap())
        .await
        .unwrap();

    assert_eq!(stats.total_sale_amount, 0.0);
    assert_eq!(stats.total_sold_items, 0);
    assert_eq!(stats.total_not_sold_items, 0);

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn price_range_buckets_for_the_march_fixture() {
    let repo = repository("price_range").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let buckets = repo
        .price_histogram(MonthWindow::for_sale_month(3).unwrap())
        .await
        .unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].id, BucketId::Bound(0));
    assert_eq!(buckets[0].count, 1);
    assert_eq!(buckets[1].id, BucketId::Bound(100));
    assert_eq!(buckets[1].count, 1);

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn category_counts_for_the_march_fixture() {
    let repo = repository("categories").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let mut counts = repo
        .category_histogram(MonthWindow::for_sale_month(3).unwrap())
        .await
        .unwrap();
    counts.sort_by(|a, b| a.category.cmp(&b.category));

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].category, "furniture");
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].category, "home");
    assert_eq!(counts[1].count, 1);

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn numeric_search_returns_the_exact_price_match() {
    let repo = repository("numeric_search").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let results = repo
        .list(ProductFilter {
            search: Some("50".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Desk Lamp");
    assert_eq!(results[0].price, 50.0);

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn text_search_is_case_insensitive() {
    let repo = repository("text_search").await;
    repo.insert_many(march_fixture()).await.unwrap();

    let results = repo
        .list(ProductFilter {
            search: Some("ERGONOMIC".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Office Chair");

    repo.collection().drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn pagination_skips_and_limits() {
    let repo = repository("pagination").await;

    let products: Vec<Product> = (0..25)
        .map(|i| Product {
            id: Uuid::now_v7(),
            title: format!("Widget {}", i),
            description: String::new(),
            price: f64::from(i),
            category: "widgets".to_string(),
            image: None,
            sold: false,
            date_of_sale: Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap(),
        })
        .collect();
    repo.insert_many(products).await.unwrap();

    let page_one = repo.list(ProductFilter::default()).await.unwrap();
    assert_eq!(page_one.len(), 10);

    let page_three = repo
        .list(ProductFilter {
            page: 3,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page_three.len(), 5);

    let seen: Vec<Uuid> = page_one.iter().chain(page_three.iter()).map(|p| p.id).collect();
    let distinct: std::collections::HashSet<Uuid> = seen.iter().copied().collect();
    assert_eq!(distinct.len(), seen.len());

    repo.collection().drop().await.unwrap();
}

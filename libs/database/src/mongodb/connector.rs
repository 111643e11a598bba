use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB with default pool settings.
///
/// The returned [`Client`] is cheap to clone and multiplexes connections
/// internally; callers own its lifecycle and drop it on shutdown.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig {
        url: url.to_string(),
        ..Default::default()
    })
    .await
}

/// Connect to MongoDB using a [`MongoConfig`].
///
/// Verifies the connection with a lightweight server round-trip before
/// returning, so startup fails fast on a bad URL instead of deferring the
/// error to the first query.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Connecting to MongoDB at {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn connect_to_local_instance() {
        let client = connect("mongodb://localhost:27017").await.unwrap();
        let names = client.list_database_names().await.unwrap();
        assert!(!names.is_empty());
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let result = connect("not-a-mongodb-url").await;
        assert!(result.is_err());
    }
}

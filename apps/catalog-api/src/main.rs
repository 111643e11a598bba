use std::time::Duration;

use axum::Router;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::MongoProductRepository;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Request deadline covering every handler, including the seed fetch and
/// the store-backed aggregations. A hung downstream call fails the request
/// instead of pinning it forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for readable error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Connected to MongoDB database: {}",
        config.mongodb.database()
    );

    MongoProductRepository::new(&db).init_indexes().await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = Router::new()
        .nest("/api", api::routes(&state)?)
        .merge(api::health::router(state.clone()))
        .merge(Scalar::with_url("/scalar", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(state.config.server.address()).await?;
    info!("Catalog API listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down: closing MongoDB connection");
    drop(state.mongo_client);
    info!("Catalog API shutdown complete");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

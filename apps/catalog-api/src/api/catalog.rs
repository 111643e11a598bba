//! Wires the catalog domain to HTTP routes

use axum::Router;
use domain_catalog::{CatalogService, HttpSeedSource, MongoProductRepository, handlers};

use crate::state::AppState;

/// Create the catalog router from application state
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoProductRepository::new(&state.db);
    let seed = HttpSeedSource::new(state.config.seed_url.clone())?;
    let service = CatalogService::new(repository, seed);

    Ok(handlers::router(service))
}

//! API routes

pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// All API routes; nested under `/api` by `main`
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new().nest("/products", catalog::router(state)?))
}

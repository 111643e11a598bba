//! Shared application state.
//!
//! The MongoDB client is an explicitly owned handle: opened once in `main`,
//! cloned into the state (cheap, shares the underlying pool), and dropped on
//! shutdown. No process-global connection exists.

use mongodb::{Client, Database};

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client handle
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}

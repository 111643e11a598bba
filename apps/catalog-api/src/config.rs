use core_config::{FromEnv, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_catalog::DEFAULT_SEED_URL;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
///
/// Everything is read from the environment at startup; there is no config
/// file.
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Upstream seed payload location (`SEED_DATA_URL`)
    pub seed_url: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?.with_app_name("catalog-api");
        let server = ServerConfig::from_env()?;
        let seed_url = env_or_default("SEED_DATA_URL", DEFAULT_SEED_URL);

        Ok(Self {
            mongodb,
            server,
            environment,
            seed_url,
        })
    }
}

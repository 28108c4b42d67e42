//! Environment-driven server configuration.

use lifeplan_cloud_sync::DEFAULT_ACCESS_CODE;

/// All configuration is read once at process start. The access code falls
/// back to the stock default when unset, so a fresh install authenticates
/// out of the box; real deployments are expected to override it.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub access_code: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env_or("LIFEPLAN_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("LIFEPLAN_DB_PATH", "lifeplan.db"),
            access_code: env_or("LIFEPLAN_ACCESS_CODE", DEFAULT_ACCESS_CODE),
        }
    }
}

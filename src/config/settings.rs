use std::env;

/// Application settings loaded from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: String,
}

impl Settings {
    /// Load settings from environment variables, with local-dev defaults
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://inventory.db?mode=rwc".to_string());

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            database_url,
            bind_address,
        }
    }
}

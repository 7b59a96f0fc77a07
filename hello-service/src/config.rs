use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ServiceError;

/// Output format of the fmt layer installed by `telemetry::init_tracing`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Reads `.env`, then an optional `configuration.*` file, then `APP__*`
    /// environment variables. Later sources win.
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();

        Self::from_sources(Environment::with_prefix("APP").separator("__"))
    }

    /// Layers `env` over an optional `configuration.*` file.
    pub fn from_sources(env: Environment) -> Result<Self, ServiceError> {
        let config = Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(env)
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ServiceError> {
        Ok(config.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

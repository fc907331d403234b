use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

/// Locations of the static fixtures loaded at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Flight files, concatenated in the order listed.
    pub flights: Vec<PathBuf>,
    pub stations: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SKYROUTE__SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("SKYROUTE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

mod config;
mod error;
mod log_level;
mod logging_config;
mod simulation_config;
mod store_config;
mod user_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use simulation_config::SimulationConfig;
pub use store_config::{StoreBackend, StoreConfig};
pub use user_config::UserConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "KB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORE_PATH: &str = "store";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_LATENCY_MS: u64 = 300;
const MAX_LATENCY_MS: u64 = 10_000;
const DEFAULT_FAILURE_RATE: f64 = 0.0;

const DEFAULT_USER_ID: &str = "local";
const DEFAULT_USER_NAME: &str = "Local User";

use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, SimulationConfig, StoreBackend, StoreConfig, UserConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub user: UserConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. KB_CONFIG_DIR env var, else ./.kb/
    /// 2. Auto-create the config directory
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply KB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: KB_CONFIG_DIR env var > ./.kb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.store.validate()?;
        self.simulation.validate()?;
        self.validation.validate()?;

        if self.user.id.trim().is_empty() {
            return Err(ConfigError::config("user.id cannot be empty"));
        }

        Ok(())
    }

    /// Absolute path of the file store directory.
    pub fn store_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.store.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        let backend = match self.store.backend {
            StoreBackend::File => "file",
            StoreBackend::Memory => "memory",
        };
        info!("  store: {} ({})", backend, self.store.path);

        info!(
            "  simulation: latency={}ms, dev_mode={}, failure_rate={}",
            self.simulation.latency_ms, self.simulation.dev_mode, self.simulation.failure_rate
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        info!(
            "  validation: title={}, desc={}, comment={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_comment_length
        );

        info!("  user: {}", self.user.name);
    }

    fn apply_env_overrides(&mut self) {
        // Store
        Self::apply_env_parse("KB_STORE_BACKEND", &mut self.store.backend);
        Self::apply_env_string("KB_STORE_PATH", &mut self.store.path);

        // Simulation
        Self::apply_env_bool("KB_DEV_MODE", &mut self.simulation.dev_mode);
        Self::apply_env_parse("KB_SIM_LATENCY_MS", &mut self.simulation.latency_ms);
        Self::apply_env_parse("KB_SIM_FAILURE_RATE", &mut self.simulation.failure_rate);

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_COMMENT_LENGTH",
            &mut self.validation.max_comment_length,
        );

        // User
        Self::apply_env_string("KB_USER_ID", &mut self.user.id);
        Self::apply_env_string("KB_USER_NAME", &mut self.user.name);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

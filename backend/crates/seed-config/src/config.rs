use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SEED_CONFIG_DIR env var, else use ./.seed/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

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

    /// Get the config directory.
    /// Priority: SEED_CONFIG_DIR env var > ./.seed/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a non-empty file name without '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  project: {}",
            self.backend.project_id.as_deref().unwrap_or("(from credentials)")
        );
        info!("  identity: {}", self.backend.identity_base_url());
        info!(
            "  firestore: {} (database {}, collection {})",
            self.backend.firestore_base_url(),
            self.backend.database_id,
            self.backend.users_collection
        );
        info!(
            "  credentials: {} env var{}",
            self.backend.credentials_env,
            if self.backend.access_token.is_some() {
                ", static access token"
            } else {
                ""
            }
        );
        if self.backend.uses_emulator() {
            info!(
                "  emulators: auth={}, firestore={}",
                self.backend.auth_emulator_host.as_deref().unwrap_or("-"),
                self.backend.firestore_emulator_host.as_deref().unwrap_or("-")
            );
        }
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_option_string("SEED_PROJECT_ID", &mut self.backend.project_id);
        Self::apply_env_string("SEED_CREDENTIALS_ENV", &mut self.backend.credentials_env);
        Self::apply_env_option_string("SEED_ACCESS_TOKEN", &mut self.backend.access_token);
        Self::apply_env_option_string(
            "FIREBASE_AUTH_EMULATOR_HOST",
            &mut self.backend.auth_emulator_host,
        );
        Self::apply_env_option_string(
            "FIRESTORE_EMULATOR_HOST",
            &mut self.backend.firestore_emulator_host,
        );
        Self::apply_env_string("GCE_METADATA_HOST", &mut self.backend.metadata_host);
        Self::apply_env_string("SEED_IDENTITY_URL", &mut self.backend.identity_url);
        Self::apply_env_string("SEED_FIRESTORE_URL", &mut self.backend.firestore_url);
        Self::apply_env_string("SEED_DATABASE_ID", &mut self.backend.database_id);
        Self::apply_env_string("SEED_USERS_COLLECTION", &mut self.backend.users_collection);

        // Logging
        Self::apply_env_parse("SEED_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SEED_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SEED_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// Empty values are ignored.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}

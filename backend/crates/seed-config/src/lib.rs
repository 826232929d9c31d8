mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "SEED_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".seed";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";
const DEFAULT_DATABASE_ID: &str = "(default)";
const DEFAULT_USERS_COLLECTION: &str = "users";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

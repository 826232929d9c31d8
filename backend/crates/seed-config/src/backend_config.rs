use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CREDENTIALS_ENV, DEFAULT_DATABASE_ID,
    DEFAULT_FIRESTORE_URL, DEFAULT_IDENTITY_URL, DEFAULT_METADATA_HOST, DEFAULT_USERS_COLLECTION,
};

use serde::Deserialize;

/// Where and how to reach the identity service and document store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Explicit project id; otherwise taken from the service account key or the environment
    pub project_id: Option<String>,
    /// Name of the environment variable holding the service account key path
    pub credentials_env: String,
    /// Pre-issued OAuth2 access token
    pub access_token: Option<String>,
    /// `host:port` of a local Auth emulator
    pub auth_emulator_host: Option<String>,
    /// `host:port` of a local Firestore emulator
    pub firestore_emulator_host: Option<String>,
    /// `host[:port]` of the compute metadata server used when no key or token is given
    pub metadata_host: String,
    pub identity_url: String,
    pub firestore_url: String,
    pub database_id: String,
    pub users_collection: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            credentials_env: String::from(DEFAULT_CREDENTIALS_ENV),
            access_token: None,
            auth_emulator_host: None,
            firestore_emulator_host: None,
            metadata_host: String::from(DEFAULT_METADATA_HOST),
            identity_url: String::from(DEFAULT_IDENTITY_URL),
            firestore_url: String::from(DEFAULT_FIRESTORE_URL),
            database_id: String::from(DEFAULT_DATABASE_ID),
            users_collection: String::from(DEFAULT_USERS_COLLECTION),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.credentials_env.trim().is_empty() {
            return Err(ConfigError::backend("backend.credentials_env cannot be empty"));
        }

        if self.users_collection.is_empty() || self.users_collection.contains('/') {
            return Err(ConfigError::backend(format!(
                "backend.users_collection must be a single collection id, got '{}'",
                self.users_collection
            )));
        }

        if self.database_id.is_empty() {
            return Err(ConfigError::backend("backend.database_id cannot be empty"));
        }

        for (name, url) in [
            ("backend.identity_url", &self.identity_url),
            ("backend.firestore_url", &self.firestore_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::backend(format!(
                    "{} must start with http:// or https://, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }

    /// Base URL for Identity Toolkit calls, honoring the Auth emulator.
    pub fn identity_base_url(&self) -> String {
        match self.auth_emulator_host {
            Some(ref host) => format!("http://{}/identitytoolkit.googleapis.com", host),
            None => self.identity_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for Firestore calls, honoring the Firestore emulator.
    pub fn firestore_base_url(&self) -> String {
        match self.firestore_emulator_host {
            Some(ref host) => format!("http://{}", host),
            None => self.firestore_url.trim_end_matches('/').to_string(),
        }
    }

    /// Token endpoint of the compute metadata server.
    pub fn metadata_token_url(&self) -> String {
        format!(
            "http://{}/computeMetadata/v1/instance/service-accounts/default/token",
            self.metadata_host
        )
    }

    pub fn uses_emulator(&self) -> bool {
        self.auth_emulator_host.is_some() || self.firestore_emulator_host.is_some()
    }
}

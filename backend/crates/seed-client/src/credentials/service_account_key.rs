use crate::{ClientError, ClientResult};

use std::fmt;
use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use serde::Deserialize;

const SERVICE_ACCOUNT_TYPE: &str = "service_account";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The fields of a Google service account key file this tool uses.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: Option<String>,
    pub project_id: Option<String>,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    String::from(DEFAULT_TOKEN_URI)
}

impl ServiceAccountKey {
    /// Read and parse a key file.
    #[track_caller]
    pub fn from_file(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClientError::CredentialsFile {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        let key: ServiceAccountKey =
            serde_json::from_str(&contents).map_err(|e| ClientError::InvalidCredentials {
                path: path.to_path_buf(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(ref key_type) = key.key_type
            && key_type != SERVICE_ACCOUNT_TYPE
        {
            return Err(ClientError::InvalidCredentials {
                path: path.to_path_buf(),
                message: format!("expected type '{}', got '{}'", SERVICE_ACCOUNT_TYPE, key_type),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if key.client_email.is_empty() || key.private_key.is_empty() {
            return Err(ClientError::InvalidCredentials {
                path: path.to_path_buf(),
                message: String::from("client_email and private_key are required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(key)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

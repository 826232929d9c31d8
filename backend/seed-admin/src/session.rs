use crate::error::{Result as SeedResult, SeedError};

use seed_client::FirebaseClient;
use seed_config::BackendConfig;

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Path named by the credential environment variable, if set and non-empty.
pub fn credentials_path(env_var: &str) -> Option<PathBuf> {
    std::env::var_os(env_var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Return the session in `slot`, creating it on first use.
///
/// A missing credential variable only produces a warning: the backend calls
/// are left to fail on their own if no other credential applies.
pub fn initialize(
    slot: &mut Option<Arc<FirebaseClient>>,
    config: &BackendConfig,
) -> SeedResult<Arc<FirebaseClient>> {
    if let Some(client) = slot {
        debug!("Reusing backend session for project {}", client.project_id);
        return Ok(Arc::clone(client));
    }

    let credentials = credentials_path(&config.credentials_env);
    if credentials.is_none() {
        warn!(
            "{} is not set. Set it to the path of your service account key JSON file before running this tool.",
            config.credentials_env
        );
    }

    let client = FirebaseClient::new(config, credentials.as_deref()).map_err(|e| {
        SeedError::Session {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;
    debug!(
        "Backend session ready: project={}, identity={}, firestore={}",
        client.project_id, client.identity_base_url, client.firestore_base_url
    );

    let client = Arc::new(client);
    *slot = Some(Arc::clone(&client));
    Ok(client)
}

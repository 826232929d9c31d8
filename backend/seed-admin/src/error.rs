use error_location::ErrorLocation;
use seed_client::ClientError;
use seed_core::BackendError;
use thiserror::Error;

/// Fatal failures of a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Config error: {0}")]
    Config(#[from] seed_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to initialize backend session: {source} {location}")]
    Session {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Error getting user by email {email}: {source} {location}")]
    AccountLookup {
        email: String,
        #[source]
        source: BackendError,
        location: ErrorLocation,
    },

    #[error("Failed to create user {email}: {source} {location}")]
    AccountCreate {
        email: String,
        #[source]
        source: BackendError,
        location: ErrorLocation,
    },

    #[error("Failed to update password for uid={uid}: {source} {location}")]
    PasswordUpdate {
        uid: String,
        #[source]
        source: BackendError,
        location: ErrorLocation,
    },

    #[error("Failed to upsert profile document for uid={uid}: {source} {location}")]
    ProfileUpsert {
        uid: String,
        #[source]
        source: BackendError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, SeedError>;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use seed_core::{BackendError, BackendErrorKind};
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, kind: {kind}) {location}")]
    Api {
        status: u16,
        kind: BackendErrorKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read credentials file {path}: {source} {location}")]
    CredentialsFile {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid credentials file {path}: {message} {location}")]
    InvalidCredentials {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to sign token assertion: {source} {location}")]
    Signing {
        location: ErrorLocation,
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("Access token error: {message} {location}")]
    Token {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "No project id: set backend.project_id, SEED_PROJECT_ID or GOOGLE_CLOUD_PROJECT {location}"
    )]
    MissingProjectId { location: ErrorLocation },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, kind: BackendErrorKind, message: String) -> Self {
        ClientError::Api {
            status,
            kind,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token<S: Into<String>>(message: S) -> Self {
        ClientError::Token {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Backend classification of this error.
    pub fn kind(&self) -> BackendErrorKind {
        match self {
            ClientError::Api { kind, .. } => *kind,
            ClientError::Http { source, .. } if source.is_timeout() || source.is_connect() => {
                BackendErrorKind::Unavailable
            }
            ClientError::Http { .. } => BackendErrorKind::Unknown,
            ClientError::Json { .. } => BackendErrorKind::Internal,
            ClientError::CredentialsFile { .. }
            | ClientError::InvalidCredentials { .. }
            | ClientError::Signing { .. }
            | ClientError::Token { .. } => BackendErrorKind::Unauthenticated,
            ClientError::MissingProjectId { .. } => BackendErrorKind::InvalidArgument,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<jsonwebtoken::errors::Error> for ClientError {
    #[track_caller]
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ClientError::Signing {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<ClientError> for BackendError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        let message = match err {
            ClientError::Api { ref message, .. } => message.clone(),
            ref other => other.to_string(),
        };
        BackendError::new(err.kind(), message)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

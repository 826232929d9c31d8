pub mod backend_error_kind;

// -------------------------------------------------------------------------- //

pub use backend_error_kind::BackendErrorKind;

use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// A failed call against the identity service or the document store.
///
/// The kind is the only thing callers branch on; the message is surfaced as-is.
#[derive(Error, Debug)]
#[error("{kind} backend error: {message} {location}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
    pub location: ErrorLocation,
}

impl BackendError {
    #[track_caller]
    pub fn new<S: Into<String>>(kind: BackendErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(BackendErrorKind::NotFound, message)
    }
}

pub type Result<T> = StdResult<T, BackendError>;

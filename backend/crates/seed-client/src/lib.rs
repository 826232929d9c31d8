//! seed-client
//!
//! REST client for the identity service (Identity Toolkit) and the document
//! store (Firestore), implementing [`seed_core::AdminBackend`].

pub(crate) mod client;
pub(crate) mod credentials;
pub(crate) mod error;


pub use client::FirebaseClient;
pub use credentials::{service_account_key::ServiceAccountKey, token_source::TokenSource};
pub use error::{ClientError, Result as ClientResult};

/// Bearer token the Auth and Firestore emulators accept from admin clients.
pub(crate) const EMULATOR_TOKEN: &str = "owner";

pub(crate) const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
pub(crate) const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub(crate) const ASSERTION_LIFETIME_SECS: i64 = 3600;

pub mod backend;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use backend::AdminBackend;
pub use error::{BackendError, BackendErrorKind, Result as BackendResult};
pub use models::account::Account;
pub use models::admin_claims::AdminClaims;
pub use models::new_account::NewAccount;
pub use models::profile_document::{CREATED_AT_FIELD, ProfileDocument};

pub use error_location::ErrorLocation;

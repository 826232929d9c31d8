use crate::{Account, AdminClaims, BackendResult, NewAccount, ProfileDocument};

use async_trait::async_trait;

/// Operations the seeder needs from the identity service and document store.
///
/// Every call is attempted once; failures carry a [`crate::BackendErrorKind`].
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// Look up an account by email. A missing account is `BackendErrorKind::NotFound`.
    async fn get_account_by_email(&self, email: &str) -> BackendResult<Account>;

    async fn create_account(&self, account: &NewAccount) -> BackendResult<Account>;

    async fn update_password(&self, uid: &str, password: &str) -> BackendResult<()>;

    async fn set_custom_claims(&self, uid: &str, claims: &AdminClaims) -> BackendResult<()>;

    /// Merge `profile` into the document keyed by `uid`, creating it if absent,
    /// and stamp `createdAt` with the server time.
    async fn merge_profile(&self, uid: &str, profile: &ProfileDocument) -> BackendResult<()>;
}

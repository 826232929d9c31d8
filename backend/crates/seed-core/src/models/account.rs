//! Account entity - the identity record owned by the authentication service.

use serde::{Deserialize, Serialize};

/// An account as returned by the identity service.
///
/// The password is write-only and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier assigned by the identity service
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Raw JSON object of custom claims, if any were set
    pub custom_claims: Option<String>,
}

impl Account {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: Some(email.into()),
            display_name: None,
            custom_claims: None,
        }
    }

    /// Whether the stored custom claims carry `admin: true`.
    pub fn is_admin(&self) -> bool {
        self.custom_claims
            .as_deref()
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
            .and_then(|claims| claims.get("admin").and_then(|v| v.as_bool()))
            .unwrap_or(false)
    }
}

use serde::{Deserialize, Serialize};

/// Custom claims attached to a seeded administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub admin: bool,
}

impl AdminClaims {
    pub fn admin() -> Self {
        Self { admin: true }
    }

    /// JSON object string, the form the identity service stores claims in.
    pub fn to_custom_attributes(&self) -> String {
        format!("{{\"admin\":{}}}", self.admin)
    }
}

impl Default for AdminClaims {
    fn default() -> Self {
        Self::admin()
    }
}

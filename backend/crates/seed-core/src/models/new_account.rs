use std::fmt;

use serde::Serialize;

/// Fields sent when creating an account.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl NewAccount {
    pub fn new(email: &str, password: &str, display_name: impl Into<String>) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.into(),
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

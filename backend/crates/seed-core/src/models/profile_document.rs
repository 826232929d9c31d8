//! Profile document - the application-level record stored at `users/<uid>`.

use serde::{Deserialize, Serialize};

/// Field stamped by the document store on every merge.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Fields merged into the profile document.
///
/// `createdAt` is not part of this struct: it is written as a server timestamp
/// transform alongside these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ProfileDocument {
    /// Document field names paired with their string values, in write order.
    ///
    /// Only fields present here are overwritten by a merge; `username` is
    /// omitted when unset so an existing value survives.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("role", self.role.as_str()),
        ];
        if let Some(ref username) = self.username {
            fields.push(("username", username.as_str()));
        }
        fields
    }
}

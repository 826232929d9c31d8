//! Identity Toolkit request and response bodies.

use seed_core::Account;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LookupRequest<'a> {
    pub email: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub users: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserInfo {
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub custom_attributes: Option<String>,
}

impl From<UserInfo> for Account {
    fn from(user: UserInfo) -> Self {
        Account {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
            custom_claims: user.custom_attributes,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpResponse {
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateRequest<'a> {
    pub local_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<String>,
}

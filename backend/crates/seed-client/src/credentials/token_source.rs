use crate::{
    ASSERTION_LIFETIME_SECS, CLOUD_PLATFORM_SCOPE, ClientError, ClientResult, JWT_BEARER_GRANT,
    ServiceAccountKey,
};

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// Where OAuth2 access tokens come from.
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// JWT bearer grant signed with a service account key
    ServiceAccount(ServiceAccountKey),
    /// A token issued out of band
    Static(String),
    /// The compute metadata server (application default credentials)
    Metadata { url: String },
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl TokenSource {
    /// Obtain an access token. Called once per client; never retried.
    pub async fn fetch(&self, http: &ReqwestClient) -> ClientResult<String> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::ServiceAccount(key) => {
                debug!("Exchanging service account assertion for {}", key.client_email);
                let assertion = Self::sign_assertion(key)?;
                let response = http
                    .post(&key.token_uri)
                    .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
                    .send()
                    .await?;
                Self::read_token(response).await
            }
            TokenSource::Metadata { url } => {
                debug!("Requesting access token from metadata server");
                let response = http
                    .get(url)
                    .header("Metadata-Flavor", "Google")
                    .send()
                    .await?;
                Self::read_token(response).await
            }
        }
    }

    /// Build the RS256 assertion for the JWT bearer grant.
    pub(crate) fn sign_assertion(key: &ServiceAccountKey) -> ClientResult<String> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: CLOUD_PLATFORM_SCOPE,
            aud: &key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?)
    }

    async fn read_token(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;
        let body: TokenResponse = serde_json::from_str(&text).map_err(|_| {
            ClientError::token(format!("token endpoint returned {}: {}", status, text))
        })?;

        match body.access_token {
            Some(token) if status.is_success() => Ok(token),
            _ => Err(ClientError::token(format!(
                "token endpoint returned {}: {} {}",
                status,
                body.error.unwrap_or_else(|| String::from("no access_token")),
                body.error_description.unwrap_or_default()
            ))),
        }
    }
}

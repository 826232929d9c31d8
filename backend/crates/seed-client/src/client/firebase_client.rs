use crate::{
    ClientError, ClientResult, EMULATOR_TOKEN, ServiceAccountKey, TokenSource,
    client::{
        firestore::merge_commit_body,
        identity::{LookupRequest, LookupResponse, SignUpResponse, UpdateRequest},
    },
};

use seed_config::BackendConfig;
use seed_core::{
    Account, AdminBackend, AdminClaims, BackendError, BackendErrorKind, BackendResult, NewAccount,
    ProfileDocument,
};

use std::panic::Location;
use std::path::Path;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::OnceCell;

const PROJECT_ENV_VARS: [&str; 2] = ["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"];

/// Session against the identity service and document store.
///
/// Holds the resolved project, endpoints and credentials. The access token is
/// fetched on first use and reused for the lifetime of the client.
pub struct FirebaseClient {
    pub project_id: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
    database_id: String,
    users_collection: String,
    auth_emulated: bool,
    firestore_emulated: bool,
    token_source: TokenSource,
    access_token: OnceCell<String>,
    http: ReqwestClient,
}

impl FirebaseClient {
    /// Create a client from configuration and an optional service account key path.
    ///
    /// # Arguments
    /// * `config` - Backend endpoints, project and token settings
    /// * `credentials_path` - Service account key file, if the credential variable is set
    pub fn new(config: &BackendConfig, credentials_path: Option<&Path>) -> ClientResult<Self> {
        let key = credentials_path
            .map(ServiceAccountKey::from_file)
            .transpose()?;

        let project_id = config
            .project_id
            .clone()
            .or_else(|| key.as_ref().and_then(|k| k.project_id.clone()))
            .or_else(Self::ambient_project_id)
            .ok_or_else(|| ClientError::MissingProjectId {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let token_source = match (key, config.access_token.as_ref()) {
            (Some(key), _) => TokenSource::ServiceAccount(key),
            (None, Some(token)) => TokenSource::Static(token.clone()),
            (None, None) => TokenSource::Metadata {
                url: config.metadata_token_url(),
            },
        };

        Ok(Self {
            project_id,
            identity_base_url: config.identity_base_url(),
            firestore_base_url: config.firestore_base_url(),
            database_id: config.database_id.clone(),
            users_collection: config.users_collection.clone(),
            auth_emulated: config.auth_emulator_host.is_some(),
            firestore_emulated: config.firestore_emulator_host.is_some(),
            token_source,
            access_token: OnceCell::new(),
            http: ReqwestClient::new(),
        })
    }

    fn ambient_project_id() -> Option<String> {
        PROJECT_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
    }

    pub fn token_source(&self) -> &TokenSource {
        &self.token_source
    }

    /// Full resource name of the profile document for `uid`.
    pub fn profile_document_name(&self, uid: &str) -> String {
        format!(
            "projects/{}/databases/{}/documents/{}/{}",
            self.project_id, self.database_id, self.users_collection, uid
        )
    }

    fn identity_url(&self, endpoint: &str) -> String {
        format!(
            "{}/v1/projects/{}/{}",
            self.identity_base_url, self.project_id, endpoint
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:commit",
            self.firestore_base_url, self.project_id, self.database_id
        )
    }

    async fn bearer(&self, emulated: bool) -> ClientResult<String> {
        if emulated {
            return Ok(String::from(EMULATOR_TOKEN));
        }

        self.access_token
            .get_or_try_init(|| self.token_source.fetch(&self.http))
            .await
            .cloned()
    }

    /// POST a JSON body and handle errors
    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        emulated: bool,
    ) -> ClientResult<Value> {
        let token = self.bearer(emulated).await?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Classify a Google API error body.
    ///
    /// Identity Toolkit codes in `error.message` win over `error.status`,
    /// which wins over the HTTP status.
    #[track_caller]
    pub(crate) fn api_error(status: u16, text: &str) -> ClientError {
        let body: Option<Value> = serde_json::from_str(text).ok();
        let error = body.as_ref().and_then(|b| b.get("error"));

        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| text.chars().take(200).collect());

        let kind = BackendErrorKind::from_identity_code(&message)
            .or_else(|| {
                error
                    .and_then(|e| e.get("status"))
                    .and_then(|v| v.as_str())
                    .map(BackendErrorKind::from_status)
                    .filter(|kind| *kind != BackendErrorKind::Unknown)
            })
            .unwrap_or_else(|| BackendErrorKind::from_http_status(status));

        ClientError::api_error(status, kind, message)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Look up an account by email
    pub async fn lookup_by_email(&self, email: &str) -> ClientResult<Option<Account>> {
        let body = LookupRequest { email: [email] };
        let value = self
            .post(&self.identity_url("accounts:lookup"), &body, self.auth_emulated)
            .await?;
        let response: LookupResponse = serde_json::from_value(value)?;
        Ok(response.users.into_iter().next().map(Account::from))
    }

    /// Create a new account
    pub async fn sign_up(&self, account: &NewAccount) -> ClientResult<Account> {
        let value = self
            .post(&self.identity_url("accounts"), account, self.auth_emulated)
            .await?;
        let response: SignUpResponse = serde_json::from_value(value)?;
        Ok(Account {
            uid: response.local_id,
            email: response.email.or_else(|| Some(account.email.clone())),
            display_name: response
                .display_name
                .or_else(|| Some(account.display_name.clone())),
            custom_claims: None,
        })
    }

    /// Update mutable fields of an account
    pub(crate) async fn update_account(&self, request: &UpdateRequest<'_>) -> ClientResult<()> {
        self.post(&self.identity_url("accounts:update"), request, self.auth_emulated)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Document Operations
    // =========================================================================

    /// Merge a profile into `<users_collection>/<uid>`
    pub async fn commit_profile(&self, uid: &str, profile: &ProfileDocument) -> ClientResult<()> {
        let body = merge_commit_body(&self.profile_document_name(uid), profile);
        self.post(&self.commit_url(), &body, self.firestore_emulated)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AdminBackend for FirebaseClient {
    async fn get_account_by_email(&self, email: &str) -> BackendResult<Account> {
        match self.lookup_by_email(email).await? {
            Some(account) => Ok(account),
            None => Err(BackendError::not_found(format!(
                "no account for email {}",
                email
            ))),
        }
    }

    async fn create_account(&self, account: &NewAccount) -> BackendResult<Account> {
        Ok(self.sign_up(account).await?)
    }

    async fn update_password(&self, uid: &str, password: &str) -> BackendResult<()> {
        let request = UpdateRequest {
            local_id: uid,
            password: Some(password),
            custom_attributes: None,
        };
        Ok(self.update_account(&request).await?)
    }

    async fn set_custom_claims(&self, uid: &str, claims: &AdminClaims) -> BackendResult<()> {
        let request = UpdateRequest {
            local_id: uid,
            password: None,
            custom_attributes: Some(claims.to_custom_attributes()),
        };
        Ok(self.update_account(&request).await?)
    }

    async fn merge_profile(&self, uid: &str, profile: &ProfileDocument) -> BackendResult<()> {
        Ok(self.commit_profile(uid, profile).await?)
    }
}

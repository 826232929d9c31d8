//! The seeding workflow.
//!
//! `Start -> SessionReady -> AccountFound | AccountCreated -> ClaimAttempted
//! -> ProfileUpserted -> Done`. Account resolution and the profile upsert are
//! fatal on failure; the claim step only warns.

use crate::{
    SeedOptions,
    error::{Result as SeedResult, SeedError},
};

use seed_core::{
    Account, AdminBackend, AdminClaims, BackendErrorKind, NewAccount, ProfileDocument,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, error, info, warn};

/// How the account was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOutcome {
    /// Existing account; its password was rotated
    Found,
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub uid: String,
    pub account: AccountOutcome,
    pub claims_set: bool,
}

/// Run the whole workflow against `backend`.
pub async fn seed_admin(
    backend: &dyn AdminBackend,
    options: &SeedOptions,
) -> SeedResult<SeedReport> {
    info!("Seeding admin user: {}", options.email);

    let (account, outcome) = resolve_account(backend, options).await?;
    let claims_set = set_admin_claim(backend, &account.uid).await;
    upsert_profile(backend, &account.uid, options).await?;

    info!("Admin user seeding complete.");

    Ok(SeedReport {
        uid: account.uid,
        account: outcome,
        claims_set,
    })
}

/// Find the account by email and rotate its password, or create it.
pub async fn resolve_account(
    backend: &dyn AdminBackend,
    options: &SeedOptions,
) -> SeedResult<(Account, AccountOutcome)> {
    let lookup_error = match backend.get_account_by_email(&options.email).await {
        Ok(account) => {
            info!(
                "User already exists with uid={}, updating password...",
                account.uid
            );
            if account.is_admin() {
                debug!("uid={} already carries the admin claim", account.uid);
            }
            backend
                .update_password(&account.uid, &options.password)
                .await
                .map_err(|e| SeedError::PasswordUpdate {
                    uid: account.uid.clone(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;
            return Ok((account, AccountOutcome::Found));
        }
        Err(e) => e,
    };

    match lookup_error.kind {
        BackendErrorKind::NotFound => {
            info!("User not found, creating...");
            let new_account =
                NewAccount::new(&options.email, &options.password, options.display_name());
            let account = backend.create_account(&new_account).await.map_err(|e| {
                error!("Error creating user {}: {}", options.email, e);
                SeedError::AccountCreate {
                    email: options.email.clone(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            info!("Created user uid={}", account.uid);
            Ok((account, AccountOutcome::Created))
        }
        BackendErrorKind::AlreadyExists
        | BackendErrorKind::InvalidArgument
        | BackendErrorKind::PermissionDenied
        | BackendErrorKind::Unauthenticated
        | BackendErrorKind::Unavailable
        | BackendErrorKind::Internal
        | BackendErrorKind::Unknown => {
            error!("Error getting user by email: {}", lookup_error);
            Err(SeedError::AccountLookup {
                email: options.email.clone(),
                source: lookup_error,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Attach `admin: true`. Returns whether it succeeded; failure is only logged.
pub async fn set_admin_claim(backend: &dyn AdminBackend, uid: &str) -> bool {
    match backend.set_custom_claims(uid, &AdminClaims::admin()).await {
        Ok(()) => {
            info!("Custom claims set {{ admin: true }}");
            true
        }
        Err(e) => {
            warn!("Could not set custom claims: {}", e.message);
            false
        }
    }
}

/// Merge the profile into the document keyed by `uid`.
pub async fn upsert_profile(
    backend: &dyn AdminBackend,
    uid: &str,
    options: &SeedOptions,
) -> SeedResult<()> {
    let profile = ProfileDocument {
        first_name: options.first.clone(),
        last_name: options.last.clone(),
        email: options.email.clone(),
        role: options.role.clone(),
        username: options.username.clone(),
    };

    backend
        .merge_profile(uid, &profile)
        .await
        .map_err(|e| SeedError::ProfileUpsert {
            uid: uid.to_string(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Firestore entry created/updated for user with role: {}",
        options.role
    );
    Ok(())
}

pub mod account;
pub mod admin_claims;
pub mod new_account;
pub mod profile_document;

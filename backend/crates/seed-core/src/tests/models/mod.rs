mod account;
mod admin_claims;
mod new_account;
mod profile_document;

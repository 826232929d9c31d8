pub(crate) mod service_account_key;
pub(crate) mod token_source;

//! seed-admin library
//!
//! Provisions or updates one administrator: an identity account with an
//! `admin: true` claim plus a merged profile document keyed by its uid.

pub mod error;
pub mod logger;
pub mod options;
pub mod seeder;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::{Result as SeedResult, SeedError};
pub use options::arg_parser::{ArgMap, ArgValue, parse_args};
pub use options::seed_options::SeedOptions;
pub use seeder::{AccountOutcome, SeedReport, seed_admin};

use seed_config::Config;

/// Load `config.toml` plus env overrides and validate the result.
pub fn load_config() -> SeedResult<Config> {
    validated(Config::load()?)
}

/// Reject a configuration that would address the backend wrongly.
pub fn validated(config: Config) -> SeedResult<Config> {
    config.validate()?;
    Ok(config)
}

/// Parse `args`, open a backend session and run the workflow.
pub async fn run<I, S>(config: &Config, args: I) -> SeedResult<SeedReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = SeedOptions::from_args(args);

    let mut session = None;
    let client = session::initialize(&mut session, &config.backend)?;

    seed_admin(&*client, &options).await
}

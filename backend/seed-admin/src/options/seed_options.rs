use crate::options::arg_parser::{ArgMap, parse_args};

use std::fmt;

pub const DEFAULT_EMAIL: &str = "admin@example.com";
pub const DEFAULT_PASSWORD: &str = "admin";
pub const DEFAULT_FIRST_NAME: &str = "Admin";
pub const DEFAULT_LAST_NAME: &str = "User";
pub const DEFAULT_ROLE: &str = "administrator";

/// Everything one seeding run needs to know about the administrator.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedOptions {
    pub email: String,
    pub password: String,
    pub first: String,
    pub last: String,
    pub username: Option<String>,
    pub role: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            email: String::from(DEFAULT_EMAIL),
            password: String::from(DEFAULT_PASSWORD),
            first: String::from(DEFAULT_FIRST_NAME),
            last: String::from(DEFAULT_LAST_NAME),
            username: None,
            role: String::from(DEFAULT_ROLE),
        }
    }
}

impl SeedOptions {
    /// Parse raw arguments and apply defaults.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_arg_map(&parse_args(args))
    }

    /// Build options from a parsed map; absent keys take their defaults.
    pub fn from_arg_map(map: &ArgMap) -> Self {
        let get = |key: &str, default: &str| {
            map.get(key)
                .map(|value| value.as_str().to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            email: get("email", DEFAULT_EMAIL),
            password: get("password", DEFAULT_PASSWORD),
            first: get("first", DEFAULT_FIRST_NAME),
            last: get("last", DEFAULT_LAST_NAME),
            username: map
                .get("username")
                .or_else(|| map.get("user"))
                .map(|value| value.as_str().to_string()),
            role: get("role", DEFAULT_ROLE),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Debug for SeedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedOptions")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

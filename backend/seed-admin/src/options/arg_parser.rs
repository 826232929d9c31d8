//! Flat `--key value` argument parsing.

use std::collections::BTreeMap;

const OPTION_PREFIX: &str = "--";

/// Value of a parsed option: the following token, or bare flag presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Flag,
}

impl ArgValue {
    /// Text form of the value; a bare flag reads as `"true"`.
    pub fn as_str(&self) -> &str {
        match self {
            ArgValue::Text(text) => text,
            ArgValue::Flag => "true",
        }
    }
}

pub type ArgMap = BTreeMap<String, ArgValue>;

/// Parse raw arguments (without the program name) into an option map.
///
/// Never fails: unknown keys are kept, stray positional tokens are skipped,
/// and an option followed by another option or an empty token becomes a flag.
pub fn parse_args<I, S>(args: I) -> ArgMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = args.into_iter().collect();
    let mut map = ArgMap::new();

    let mut i = 0;
    while i < tokens.len() {
        if let Some(key) = tokens[i].as_ref().strip_prefix(OPTION_PREFIX) {
            let next: Option<&str> = tokens.get(i + 1).map(|token| token.as_ref());
            let value = match next {
                Some(next) if !next.is_empty() && !next.starts_with(OPTION_PREFIX) => {
                    i += 1;
                    ArgValue::Text(next.to_string())
                }
                _ => ArgValue::Flag,
            };
            map.insert(key.to_string(), value);
        }
        i += 1;
    }

    map
}

use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_known_values() {
    assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn test_log_level_unknown_value_defaults_to_info() {
    assert_eq!(LogLevel::from_str("loud").unwrap(), LogLevel(LevelFilter::Info));
}

#[test]
fn test_log_level_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"trace\"").unwrap();
    assert_eq!(wrapper.level, LogLevel(LevelFilter::Trace));
}

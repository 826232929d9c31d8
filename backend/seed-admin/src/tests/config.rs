use crate::{SeedError, validated};

use seed_config::{BackendConfig, Config};

#[test]
fn test_validated_accepts_defaults() {
    assert!(validated(Config::default()).is_ok());
}

#[test]
fn test_validated_reports_config_error() {
    let config = Config {
        backend: BackendConfig {
            users_collection: String::from("users/nested"),
            ..BackendConfig::default()
        },
        ..Config::default()
    };

    match validated(config) {
        Err(SeedError::Config(e)) => assert!(e.to_string().contains("users_collection")),
        other => panic!("expected Config error, got {:?}", other.map(|_| ())),
    }
}

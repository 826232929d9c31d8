//! End-to-end runs of the seeding workflow against a wiremock backend

use seed_admin::{AccountOutcome, SeedError, run};
use seed_config::{BackendConfig, Config};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, method, path},
};

const LOOKUP: &str = "/v1/projects/demo-seed/accounts:lookup";
const SIGN_UP: &str = "/v1/projects/demo-seed/accounts";
const UPDATE: &str = "/v1/projects/demo-seed/accounts:update";
const COMMIT: &str = "/v1/projects/demo-seed/databases/(default)/documents:commit";

fn config_for(server: &MockServer) -> Config {
    Config {
        backend: BackendConfig {
            project_id: Some(String::from("demo-seed")),
            credentials_env: String::from("SEED_IT_CREDENTIALS_NEVER_SET"),
            access_token: Some(String::from("test-token")),
            identity_url: server.uri(),
            firestore_url: server.uri(),
            ..BackendConfig::default()
        },
        ..Config::default()
    }
}

const ARGS: [&str; 10] = [
    "--email", "a@x.com", "--password", "pw1", "--first", "A", "--last", "B", "--username", "au",
];

async fn mount_commit(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path(COMMIT))
        .and(body_string_contains("\"setToServerValue\":\"REQUEST_TIME\""))
        .and(body_string_contains("users/uid-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "writeResults": [{}],
            "commitTime": "2026-10-15T00:00:00Z"
        })))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fresh_backend_creates_account_sets_claims_and_upserts_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOOKUP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SIGN_UP))
        .and(body_json(json!({
            "email": "a@x.com",
            "password": "pw1",
            "displayName": "A B"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-new",
            "email": "a@x.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(UPDATE))
        .and(body_json(json!({
            "localId": "uid-new",
            "customAttributes": "{\"admin\":true}"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_commit(&mock_server, 1).await;

    let report = run(&config_for(&mock_server), ARGS).await.unwrap();

    assert_eq!(report.uid, "uid-new");
    assert_eq!(report.account, AccountOutcome::Created);
    assert!(report.claims_set);
}

#[tokio::test]
async fn test_existing_account_rotates_password_without_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOOKUP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "localId": "uid-new", "email": "a@x.com" }]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SIGN_UP))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(UPDATE))
        .and(body_json(json!({ "localId": "uid-new", "password": "pw2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(UPDATE))
        .and(body_string_contains("customAttributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_commit(&mock_server, 1).await;

    let args = [
        "--email", "a@x.com", "--password", "pw2", "--first", "A", "--last", "B",
    ];
    let report = run(&config_for(&mock_server), args).await.unwrap();

    assert_eq!(report.account, AccountOutcome::Found);
    assert_eq!(report.uid, "uid-new");
}

#[tokio::test]
async fn test_claims_failure_does_not_block_profile_upsert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOOKUP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SIGN_UP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(UPDATE))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error", "status": "INTERNAL" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_commit(&mock_server, 1).await;

    let report = run(&config_for(&mock_server), ARGS).await.unwrap();

    assert!(!report.claims_set);
}

#[tokio::test]
async fn test_lookup_permission_denied_is_fatal_before_any_write() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOOKUP))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "INSUFFICIENT_PERMISSION" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMMIT))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run(&config_for(&mock_server), ARGS).await;

    assert!(matches!(result, Err(SeedError::AccountLookup { .. })));
}

#[tokio::test]
async fn test_profile_commit_failure_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOOKUP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SIGN_UP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(UPDATE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-new" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMMIT))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "Missing or insufficient permissions.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&mock_server)
        .await;

    let result = run(&config_for(&mock_server), ARGS).await;

    assert!(matches!(result, Err(SeedError::ProfileUpsert { .. })));
}

#[tokio::test]
async fn test_lookup_endpoint_404_is_fatal_and_never_creates() {
    for response in [
        ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"),
        ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "status": "NOT_FOUND" }
        })),
    ] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOOKUP))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path(SIGN_UP))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid-x" })))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = run(&config_for(&mock_server), ["--email", "a@x.com"]).await;

        assert!(matches!(result, Err(SeedError::AccountLookup { .. })));
    }
}

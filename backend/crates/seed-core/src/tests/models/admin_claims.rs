use crate::AdminClaims;

#[test]
fn test_admin_claims_custom_attributes() {
    assert_eq!(AdminClaims::admin().to_custom_attributes(), r#"{"admin":true}"#);
}

#[test]
fn test_admin_claims_matches_serde_json() {
    let claims = AdminClaims::default();
    assert_eq!(
        serde_json::to_string(&claims).unwrap(),
        claims.to_custom_attributes()
    );
}

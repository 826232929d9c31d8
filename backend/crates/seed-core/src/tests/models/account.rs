use crate::Account;

#[test]
fn test_account_new_has_no_claims() {
    let account = Account::new("uid-1", "a@x.com");
    assert_eq!(account.email.as_deref(), Some("a@x.com"));
    assert!(!account.is_admin());
}

#[test]
fn test_account_is_admin_reads_custom_claims() {
    let mut account = Account::new("uid-1", "a@x.com");
    account.custom_claims = Some(String::from(r#"{"admin":true,"tier":"gold"}"#));
    assert!(account.is_admin());

    account.custom_claims = Some(String::from(r#"{"admin":false}"#));
    assert!(!account.is_admin());

    account.custom_claims = Some(String::from("not json"));
    assert!(!account.is_admin());
}

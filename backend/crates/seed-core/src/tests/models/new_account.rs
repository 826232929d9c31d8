use crate::NewAccount;

#[test]
fn test_new_account_keeps_display_name() {
    let account = NewAccount::new("a@x.com", "pw1", "A B");
    assert_eq!(account.display_name, "A B");
}

#[test]
fn test_new_account_debug_redacts_password() {
    let account = NewAccount::new("a@x.com", "hunter2", "A B");
    let debug = format!("{:?}", account);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("a@x.com"));
}

#[test]
fn test_new_account_serializes_camel_case() {
    let account = NewAccount::new("a@x.com", "pw1", "A B");
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["displayName"], "A B");
    assert_eq!(json["password"], "pw1");
}

use crate::ProfileDocument;

fn profile(username: Option<&str>) -> ProfileDocument {
    ProfileDocument {
        first_name: String::from("A"),
        last_name: String::from("B"),
        email: String::from("a@x.com"),
        role: String::from("administrator"),
        username: username.map(String::from),
    }
}

#[test]
fn test_fields_include_username_when_set() {
    let profile = profile(Some("au"));
    let fields = profile.fields();
    assert_eq!(
        fields,
        vec![
            ("firstName", "A"),
            ("lastName", "B"),
            ("email", "a@x.com"),
            ("role", "administrator"),
            ("username", "au"),
        ]
    );
}

#[test]
fn test_fields_omit_username_when_unset() {
    let profile = profile(None);
    let fields = profile.fields();
    assert_eq!(fields.len(), 4);
    assert!(fields.iter().all(|(name, _)| *name != "username"));
}

#[test]
fn test_serialize_skips_missing_username() {
    let json = serde_json::to_value(profile(None)).unwrap();
    assert!(json.get("username").is_none());
    assert_eq!(json["firstName"], "A");
}

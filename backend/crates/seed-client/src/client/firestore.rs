//! Firestore `documents:commit` payloads.

use seed_core::{CREATED_AT_FIELD, ProfileDocument};

use serde_json::{Map, Value, json};

/// Build a commit body that merges `profile` into the document `name`.
///
/// The update mask lists exactly the supplied fields, so fields missing from
/// `profile` keep their stored values. `createdAt` is set to the request time
/// on every commit.
pub(crate) fn merge_commit_body(name: &str, profile: &ProfileDocument) -> Value {
    let fields = profile.fields();

    let mut values = Map::new();
    for (field, value) in &fields {
        values.insert((*field).to_string(), json!({ "stringValue": value }));
    }
    let field_paths: Vec<&str> = fields.iter().map(|(field, _)| *field).collect();

    json!({
        "writes": [{
            "update": {
                "name": name,
                "fields": values,
            },
            "updateMask": { "fieldPaths": field_paths },
            "updateTransforms": [{
                "fieldPath": CREATED_AT_FIELD,
                "setToServerValue": "REQUEST_TIME",
            }],
        }]
    })
}

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::MergeError;
use crate::order::GroupOrder;
use crate::scanner::Fragments;
use crate::theme::CUSTOM_CONFIG_KEY;

/// Top-level JSON object
pub type JsonObject = Map<String, Value>;

/// Short name of a JSON value's type for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read config/main.json, which must hold a JSON object
pub fn read_main_config(path: &Path) -> Result<JsonObject, MergeError> {
    let parse_error = |reason: String| MergeError::MainConfigParse {
        path: path.to_path_buf(),
        reason,
    };

    if !path.is_file() {
        return Err(parse_error("file not found".to_string()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| parse_error(format!("cannot read: {e}")))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| parse_error(format!("invalid JSON: {e}")))?;

    match value {
        Value::Object(map) => {
            info!("Loaded main config: {}", path.display());
            Ok(map)
        }
        other => Err(parse_error(format!(
            "must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Build the ordered `customConfig` object
pub fn build_custom_config(fragments: &Fragments, order: &GroupOrder) -> JsonObject {
    let mut custom = JsonObject::new();
    for name in order.entries() {
        match fragments.get(name) {
            Some(value) => {
                custom.insert(name.to_string(), value.clone());
            }
            None => debug!("Group '{}' has no fragment (skipped)", name),
        }
    }
    custom
}

/// Attach the ordered groups to the main config under `customConfig`.
///
/// An existing `customConfig` key is replaced where it stands; otherwise the
/// key goes last.
pub fn merge(mut main: JsonObject, fragments: &Fragments, order: &GroupOrder) -> JsonObject {
    let custom = build_custom_config(fragments, order);
    main.insert(CUSTOM_CONFIG_KEY.to_string(), Value::Object(custom));
    main
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GroupName;
    use serde_json::json;
    use tempfile::TempDir;

    fn fragments(pairs: &[(&str, Value)]) -> Fragments {
        pairs
            .iter()
            .map(|(name, value)| (GroupName::parse(name).unwrap(), value.clone()))
            .collect()
    }

    fn order(list: &[&str]) -> GroupOrder {
        GroupOrder::new(list.iter().map(|s| GroupName::parse(s).unwrap()))
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    // ==================== read_main_config tests ====================

    #[test]
    fn test_read_main_config_preserves_key_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.json");
        fs::write(&path, r#"{"name": "t", "version": "1", "author": "a"}"#).unwrap();

        let main = read_main_config(&path).unwrap();

        let keys: Vec<&str> = main.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "version", "author"]);
    }

    #[test]
    fn test_read_main_config_keeps_large_numbers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.json");
        fs::write(&path, r#"{"big": 123456789012345678901234567890, "huge": 1e400}"#).unwrap();

        let main = read_main_config(&path).unwrap();

        assert_eq!(
            serde_json::to_string(&main).unwrap(),
            r#"{"big":123456789012345678901234567890,"huge":1e400}"#
        );
    }

    #[test]
    fn test_read_main_config_missing() {
        let temp = TempDir::new().unwrap();
        let result = read_main_config(&temp.path().join("main.json"));
        assert!(matches!(result, Err(MergeError::MainConfigParse { .. })));
    }

    #[test]
    fn test_read_main_config_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.json");
        fs::write(&path, "{ nope").unwrap();

        let err = read_main_config(&path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_read_main_config_not_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.json");
        fs::write(&path, "[1, 2]").unwrap();

        let err = read_main_config(&path).unwrap_err();
        assert!(err.to_string().contains("got array"));
    }

    // ==================== merge tests ====================

    #[test]
    fn test_merge_follows_order() {
        let main = object(json!({"a": 1}));
        let frags = fragments(&[("x", json!({"v": 1})), ("y", json!({"v": 2}))]);

        let merged = merge(main, &frags, &order(&["y", "x"]));

        let rendered = serde_json::to_string(&merged).unwrap();
        assert_eq!(
            rendered,
            r#"{"a":1,"customConfig":{"y":{"v":2},"x":{"v":1}}}"#
        );
    }

    #[test]
    fn test_merge_scenario_lexical_order() {
        let main = object(json!({"a": 1}));
        let frags = fragments(&[("x", json!({"v": 1})), ("y", json!({"v": 2}))]);

        let merged = merge(main, &frags, &order(&["x", "y"]));

        assert_eq!(
            serde_json::to_string(&merged).unwrap(),
            r#"{"a":1,"customConfig":{"x":{"v":1},"y":{"v":2}}}"#
        );
    }

    #[test]
    fn test_merge_replaces_existing_custom_config_in_place() {
        let main: JsonObject =
            serde_json::from_str(r#"{"customConfig": {"stale": true}, "z": 0}"#).unwrap();
        let frags = fragments(&[("g", json!([1]))]);

        let merged = merge(main, &frags, &order(&["g"]));

        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["customConfig", "z"]);
        assert_eq!(merged["customConfig"], json!({"g": [1]}));
    }

    #[test]
    fn test_merge_fragment_round_trip() {
        let value = json!({"nested": {"list": [1, "two", null, 3.5]}, "flag": false});
        let frags = fragments(&[("g", value.clone())]);

        let merged = merge(JsonObject::new(), &frags, &order(&["g"]));

        assert_eq!(merged["customConfig"]["g"], value);
    }

    #[test]
    fn test_build_custom_config_skips_unknown() {
        let frags = fragments(&[("a", json!(1))]);
        let custom = build_custom_config(&frags, &order(&["ghost", "a"]));
        assert_eq!(Value::Object(custom), json!({"a": 1}));
    }

    #[test]
    fn test_merge_empty_groups() {
        let merged = merge(object(json!({"a": 1})), &Fragments::new(), &GroupOrder::default());
        assert_eq!(Value::Object(merged), json!({"a": 1, "customConfig": {}}));
    }
}

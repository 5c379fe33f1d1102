//! Serialization module for rendering cleaned parameters.
//!
//! Cleaned values can be written as JSON or YAML documents, or flattened into a
//! form/query payload using bracket notation.

use crate::cleaner::NestedValue;
use anyhow::{Context, Result};
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Characters escaped in form keys and values: everything except RFC 3986 unreserved.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Serializes a value to pretty-printed JSON.
///
/// Object fields keep their insertion order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    debug!("Serializing to JSON");
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// Serializes a value to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    debug!("Serializing to YAML");
    serde_yaml::to_string(value).context("Failed to serialize to YAML")
}

/// Flattens a cleaned value into an `application/x-www-form-urlencoded` payload.
///
/// Nested fields use bracket notation (`object[key3][key1]=hoho`) and list elements
/// are addressed by index (`list[0]=4`). `null` examples are omitted.
pub fn serialize_form(value: &NestedValue) -> String {
    debug!("Serializing to form payload");
    let mut pairs = Vec::new();
    match value {
        NestedValue::Map(fields) => {
            for (name, field) in fields {
                flatten_nested(&encode(name), field, &mut pairs);
            }
        }
        other => flatten_nested("", other, &mut pairs),
    }
    pairs.join("&")
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, FORM_COMPONENT).to_string()
}

fn nested_key(prefix: &str, part: &str) -> String {
    if prefix.is_empty() {
        part.to_string()
    } else {
        format!("{}[{}]", prefix, part)
    }
}

fn flatten_nested(key: &str, value: &NestedValue, pairs: &mut Vec<String>) {
    match value {
        NestedValue::Leaf(leaf) => flatten_json(key, leaf, pairs),
        NestedValue::Map(fields) => {
            for (name, field) in fields {
                flatten_nested(&nested_key(key, &encode(name)), field, pairs);
            }
        }
        NestedValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_nested(&nested_key(key, &i.to_string()), item, pairs);
            }
        }
    }
}

fn flatten_json(key: &str, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push(format!("{}={}", key, b)),
        Value::Number(n) => pairs.push(format!("{}={}", key, n)),
        Value::String(s) => pairs.push(format!("{}={}", key, encode(s))),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_json(&nested_key(key, &i.to_string()), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten_json(&nested_key(key, &encode(name)), field, pairs);
            }
        }
    }
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::clean;
    use crate::descriptor::{ParameterDescriptor, ParameterMap};
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> NestedValue {
        let mut parameters = ParameterMap::new();
        for (name, param_type, example) in [
            ("object", "object", json!({})),
            ("object.key1", "string", json!("43")),
            ("object.key3", "object", json!({})),
            ("object.key3.key1", "string", json!("hoho")),
            ("list", "integer[]", json!([4])),
            ("list_of_objects", "object[]", json!([])),
            ("list_of_objects[].key1", "string", json!("John")),
            ("list_of_objects[].key2", "boolean", json!(false)),
        ] {
            parameters.insert(
                name.to_string(),
                ParameterDescriptor::new(name, param_type.parse().unwrap(), example),
            );
        }
        clean(&parameters)
    }

    #[test]
    fn test_serialize_json_keeps_field_order() {
        let json = serialize_json(&sample()).unwrap();

        let object = json.find("\"object\"").unwrap();
        let list = json.find("\"list\"").unwrap();
        let list_of_objects = json.find("\"list_of_objects\"").unwrap();
        assert!(object < list && list < list_of_objects);
        assert!(json.contains('\n'), "JSON should be pretty-printed");

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["object"]["key3"]["key1"], "hoho");
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&sample()).unwrap();

        assert!(yaml.contains("object:"));
        assert!(yaml.contains("key1: hoho"));
        assert!(yaml.contains("list_of_objects:"));

        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["list"], json!([4]));
    }

    #[test]
    fn test_serialize_form() {
        let form = serialize_form(&sample());

        assert_eq!(
            form,
            "object[key1]=43&object[key3][key1]=hoho&list[0]=4\
             &list_of_objects[0][key1]=John&list_of_objects[0][key2]=false"
        );
    }

    #[test]
    fn test_serialize_form_encodes_and_skips_nulls() {
        let mut fields = indexmap::IndexMap::new();
        fields.insert("full name".to_string(), NestedValue::Leaf(json!("Ada Lovelace & co")));
        fields.insert("nickname".to_string(), NestedValue::Leaf(Value::Null));
        fields.insert("meta".to_string(), NestedValue::Leaf(json!({ "a/b": 1.5 })));

        let form = serialize_form(&NestedValue::Map(fields));

        assert_eq!(form, "full%20name=Ada%20Lovelace%20%26%20co&meta[a%2Fb]=1.5");
    }

    #[test]
    fn test_serialize_form_empty() {
        assert_eq!(serialize_form(&NestedValue::Map(Default::default())), "");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("body.json");

        write_to_file("{}", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("subdir").join("nested").join("body.yaml");

        write_to_file("a: 1\n", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("body.json");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }
}

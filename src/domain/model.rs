use crate::utils::error::{FileError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Index;

static NULL: Value = Value::Null;

/// Parsed YAML/JSON/TOML document.
///
/// Wraps a `serde_json::Value` and adds key and dotted-path access on top of it.
/// Callers that want a typed view use [`ConfigTree::extract`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree {
    value: Value,
}

impl ConfigTree {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Top-level key access. `None` when the key is absent or the root is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }

    /// Nested access with a dotted path, e.g. `"training.layers.0.units"`.
    ///
    /// Numeric segments index into sequences. An empty path returns the root.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.value);
        }

        path.split('.').try_fold(&self.value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Returns the value at `path` as its own tree.
    pub fn section(&self, path: &str) -> Result<ConfigTree> {
        self.lookup(path)
            .cloned()
            .map(ConfigTree::new)
            .ok_or_else(|| FileError::MissingKey {
                key: path.to_string(),
            })
    }

    pub fn require_str(&self, path: &str) -> Result<&str> {
        let value = self.lookup(path).ok_or_else(|| FileError::MissingKey {
            key: path.to_string(),
        })?;
        value.as_str().ok_or_else(|| FileError::InvalidValue {
            key: path.to_string(),
            expected: "a string".to_string(),
        })
    }

    /// Deserializes the whole tree into a typed configuration struct.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.value)?)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.value
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// True for an empty mapping, an empty sequence, or `null`.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for ConfigTree {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl Index<&str> for ConfigTree {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigTree {
        ConfigTree::new(json!({
            "artifacts_root": "artifacts",
            "training": {
                "epochs": 10,
                "layers": [{"units": 64}, {"units": 32}]
            }
        }))
    }

    #[test]
    fn test_key_and_index_access() {
        let tree = sample();
        assert_eq!(tree.get("artifacts_root"), Some(&json!("artifacts")));
        assert_eq!(tree["artifacts_root"], "artifacts");
        assert_eq!(tree["training"]["epochs"], 10);
        assert!(tree["missing"].is_null());
        assert!(tree.get("missing").is_none());
    }

    #[test]
    fn test_lookup_dotted_path() {
        let tree = sample();
        assert_eq!(tree.lookup("training.epochs"), Some(&json!(10)));
        assert_eq!(tree.lookup("training.layers.1.units"), Some(&json!(32)));
        assert_eq!(tree.lookup("training.layers.9.units"), None);
        assert_eq!(tree.lookup("training.epochs.deeper"), None);
        assert_eq!(tree.lookup(""), Some(tree.as_value()));
    }

    #[test]
    fn test_section_and_require_str() {
        let tree = sample();
        let training = tree.section("training").unwrap();
        assert_eq!(training["epochs"], 10);
        assert_eq!(tree.require_str("artifacts_root").unwrap(), "artifacts");

        assert!(matches!(
            tree.section("evaluation"),
            Err(FileError::MissingKey { .. })
        ));
        assert!(matches!(
            tree.require_str("training.epochs"),
            Err(FileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_extract_typed_struct() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Training {
            epochs: u32,
        }

        let tree = sample();
        let training: Training = tree.section("training").unwrap().extract().unwrap();
        assert_eq!(training, Training { epochs: 10 });

        let wrong: Result<Training> = tree.extract();
        assert!(matches!(wrong, Err(FileError::JsonError(_))));
    }

    #[test]
    fn test_keys_and_emptiness() {
        let tree = sample();
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["artifacts_root", "training"]);
        assert!(!tree.is_empty());
        assert!(ConfigTree::new(json!({})).is_empty());
        assert_eq!(ConfigTree::new(json!([1, 2])).keys().count(), 0);
    }
}

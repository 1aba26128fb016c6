use std::collections::BTreeMap;

use serde_yaml::Value;

/// Front-matter metadata for a single page.
///
/// Keys are author-defined; there is no fixed schema beyond convention, so
/// values stay untyped and are looked up by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    values: BTreeMap<String, Value>,
}

impl Metadata {
    /// Wrap a parsed front-matter mapping
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Metadata { values }
    }

    /// Look up a metadata value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a string metadata value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether any metadata keys are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let mut values = BTreeMap::new();
        values.insert("title".to_string(), Value::String("Home".to_string()));
        values.insert("weight".to_string(), Value::Number(3.into()));
        let metadata = Metadata::new(values);

        assert_eq!(metadata.get_str("title"), Some("Home"));
        assert_eq!(metadata.get("weight").and_then(Value::as_i64), Some(3));
        assert_eq!(metadata.get("missing"), None);
        assert!(!metadata.is_empty());
    }
}

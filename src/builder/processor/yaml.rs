use liquid::model::Value as LiquidValue;
use serde_yaml::Value as YamlValue;

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                // Default to string
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s),
        YamlValue::Sequence(seq) => {
            let values: Vec<LiquidValue> = seq.into_iter().map(yaml_to_liquid).collect();
            LiquidValue::Array(values)
        }
        YamlValue::Mapping(map) => {
            let mut obj = liquid::Object::new();
            for (k, v) in map {
                if let YamlValue::String(key) = k {
                    obj.insert(key.into(), yaml_to_liquid(v));
                } else {
                    // Use string representation of key
                    let key_str = format!("{:?}", k);
                    obj.insert(key_str.into(), yaml_to_liquid(v));
                }
            }
            LiquidValue::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquid::ValueView;

    #[test]
    fn test_scalars_and_sequences() {
        assert!(yaml_to_liquid(YamlValue::Null).is_nil());
        assert_eq!(
            yaml_to_liquid(YamlValue::String("hi".to_string())).to_kstr(),
            "hi"
        );

        let seq = YamlValue::Sequence(vec![
            YamlValue::Number(1.into()),
            YamlValue::Number(2.into()),
        ]);
        match yaml_to_liquid(seq) {
            LiquidValue::Array(values) => assert_eq!(values.len(), 2),
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_mappings_become_objects() {
        let yaml: YamlValue = serde_yaml::from_str("nav:\n  home: /index.html\n").unwrap();
        match yaml_to_liquid(yaml) {
            LiquidValue::Object(obj) => {
                assert!(obj.contains_key("nav"));
            }
            other => panic!("expected object, got {:?}", other),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A YAML/JSON/TOML value lowered to a tagged, order-preserving shape: the
/// core never sees the duck-typed source document, only `StyleCorpus`
/// built from this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Scalar(String),
    Mapping(Vec<(String, RawValue)>),
    Sequence(Vec<RawValue>),
}

impl From<serde_yaml::Value> for RawValue {
    /// `serde_yaml::Value`'s mapping type preserves insertion order; this
    /// walk mirrors that into `RawValue`'s own order-preserving shape, so
    /// the core only ever sees deeply dynamic content already lowered to
    /// tagged variants.
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => RawValue::Scalar(String::new()),
            serde_yaml::Value::Bool(b) => RawValue::Scalar(b.to_string()),
            serde_yaml::Value::Number(n) => RawValue::Scalar(n.to_string()),
            serde_yaml::Value::String(s) => RawValue::Scalar(s),
            serde_yaml::Value::Sequence(items) => {
                RawValue::Sequence(items.into_iter().map(RawValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => RawValue::Mapping(
                map.into_iter()
                    .filter_map(|(k, v)| {
                        k.as_str().map(|key| (key.to_string(), RawValue::from(v)))
                    })
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => RawValue::from(tagged.value),
        }
    }
}

impl RawValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            RawValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, RawValue)]> {
        match self {
            RawValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

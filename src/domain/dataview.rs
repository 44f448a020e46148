//! Host data-view snapshots handed to the visual on every update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DomainError;

/// One update cycle's snapshot of host data. Built fresh by the host per
/// update call and never retained by the visual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    /// Single-value projection; the card contract binds exactly one scalar.
    #[serde(default)]
    pub single: Option<SingleValue>,
    #[serde(default)]
    pub metadata: DataViewMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleValue {
    pub value: Value,
}

/// Format-pane state keyed by object name, then property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataViewMetadata {
    #[serde(default)]
    pub objects: Map<String, Value>,
}

impl DataView {
    /// Snapshot carrying just a single value.
    pub fn of_value(value: Value) -> Self {
        Self {
            single: Some(SingleValue { value }),
            metadata: DataViewMetadata::default(),
        }
    }

    /// Attach a format-pane property, creating the object entry on demand.
    pub fn with_object_property(
        mut self,
        object: &str,
        property: &str,
        value: Value,
    ) -> Self {
        let entry = self
            .metadata
            .objects
            .entry(object.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(properties) = entry {
            properties.insert(property.to_string(), value);
        }
        self
    }

    /// The bound scalar, if the host supplied one.
    pub fn single_value(&self) -> Option<&Value> {
        self.single.as_ref().map(|single| &single.value)
    }

    /// Look up `objects[object][property]` in the format-pane state.
    pub fn object_property(&self, object: &str, property: &str) -> Option<&Value> {
        self.metadata.objects.get(object)?.get(property)
    }
}

/// Convert a data-view scalar into its display string.
///
/// Arrays, objects, and null are not representable; hosts produce those when
/// a field binding is misconfigured.
pub fn scalar_string(value: &Value) -> Result<String, DomainError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Err(DomainError::validation("data view value is null")),
        Value::Array(_) | Value::Object(_) => Err(DomainError::validation(
            "data view value is not a scalar",
        )),
    }
}

//! Property-pane enumeration for the host settings dialog.

use serde_json::{Map, Value};

use super::settings::{HTML_RISK_PROPERTY, HTML_SETTINGS_OBJECT, RiskSettings};

/// One configurable object instance surfaced to the host property pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInstance {
    pub object_name: String,
    pub display_name: String,
    /// Property values keyed by the host schema's property names.
    pub properties: Map<String, Value>,
}

/// Enumerate instances for `object_name`, reflecting the live settings.
///
/// Names outside the schema yield an empty set; the host treats its own
/// schema as authoritative and this enumeration as advisory.
pub(super) fn enumerate(object_name: &str, settings: &RiskSettings) -> Vec<PropertyInstance> {
    match object_name {
        HTML_SETTINGS_OBJECT => {
            let mut properties = Map::new();
            properties.insert(
                HTML_RISK_PROPERTY.to_string(),
                Value::Bool(settings.accept_html_risk),
            );

            vec![PropertyInstance {
                object_name: object_name.to_string(),
                display_name: "Accept HTML risk".to_string(),
                properties,
            }]
        }
        _ => Vec::new(),
    }
}

//! Format-pane settings parsed from the host data view.

use serde_json::Value;

use crate::domain::dataview::DataView;

/// Object and property names fixed by the host's format-pane schema.
pub const HTML_SETTINGS_OBJECT: &str = "htmlSettings";
pub const HTML_RISK_PROPERTY: &str = "htmlRiskProperty";

/// User-facing risk acceptance settings.
///
/// The gate defaults to closed: content renders only after the user opts in
/// through the host's format pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskSettings {
    pub accept_html_risk: bool,
}

impl RiskSettings {
    /// Parse settings from a data view. Lenient by design: a missing object,
    /// missing property, or unrecognised value keeps the gate closed.
    pub fn parse(data_view: &DataView) -> Self {
        let accept_html_risk = data_view
            .object_property(HTML_SETTINGS_OBJECT, HTML_RISK_PROPERTY)
            .and_then(as_bool)
            .unwrap_or(false);

        Self { accept_html_risk }
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        // Some hosts serialise pane booleans as strings.
        Value::String(text) if text == "true" => Some(true),
        Value::String(text) if text == "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{HTML_RISK_PROPERTY, HTML_SETTINGS_OBJECT, RiskSettings};
    use crate::domain::dataview::DataView;

    fn view_with_gate(value: serde_json::Value) -> DataView {
        DataView::of_value(json!("<p>x</p>")).with_object_property(
            HTML_SETTINGS_OBJECT,
            HTML_RISK_PROPERTY,
            value,
        )
    }

    #[test]
    fn missing_objects_keep_the_gate_closed() {
        let settings = RiskSettings::parse(&DataView::default());

        assert!(!settings.accept_html_risk);
    }

    #[test]
    fn boolean_true_opens_the_gate() {
        let settings = RiskSettings::parse(&view_with_gate(json!(true)));

        assert!(settings.accept_html_risk);
    }

    #[test]
    fn string_booleans_are_accepted() {
        assert!(RiskSettings::parse(&view_with_gate(json!("true"))).accept_html_risk);
        assert!(!RiskSettings::parse(&view_with_gate(json!("false"))).accept_html_risk);
    }

    #[test]
    fn unrecognised_values_keep_the_gate_closed() {
        assert!(!RiskSettings::parse(&view_with_gate(json!(1))).accept_html_risk);
        assert!(!RiskSettings::parse(&view_with_gate(json!("yes"))).accept_html_risk);
        assert!(!RiskSettings::parse(&view_with_gate(json!(null))).accept_html_risk);
    }
}

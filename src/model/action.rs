use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single corrective operation within a remediation stage.
///
/// `action` names the kind of correction (e.g. `scaling`, `featuretoggle`);
/// `value` is the free-form payload handed to whatever executes the action.
/// Fields not declared here are kept verbatim in `extra` so documents survive
/// a load/store round trip without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemediationAction {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemediationAction {
    pub fn new(action: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            name: name.into(),
            description: None,
            value: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.action.is_empty()) {
            (false, false) => write!(f, "{} ({})", self.name, self.action),
            (false, true) => write!(f, "{}", self.name),
            (true, false) => write!(f, "({})", self.action),
            (true, true) => write!(f, "(unnamed action)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_fields() {
        let action = RemediationAction::new("scaling", "scale up")
            .with_description("Add one replica")
            .with_value(json!("1"));
        assert_eq!(action.action, "scaling");
        assert_eq!(action.name, "scale up");
        assert_eq!(action.description.as_deref(), Some("Add one replica"));
        assert_eq!(action.value, Some(json!("1")));
        assert!(action.extra.is_empty());
    }

    #[test]
    fn deserialize_from_wire_format() {
        let action: RemediationAction = serde_json::from_str(
            r#"{"action":"featuretoggle","name":"disable promotion","value":{"EnablePromotion":"off"}}"#,
        )
        .unwrap();
        assert_eq!(action.action, "featuretoggle");
        assert_eq!(action.value, Some(json!({"EnablePromotion": "off"})));
    }

    #[test]
    fn undeclared_fields_survive_round_trip() {
        let input = json!({"action": "scaling", "id": "a1", "owner": {"team": "sre"}});
        let action: RemediationAction = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(action.extra.get("id"), Some(&json!("a1")));
        assert_eq!(serde_json::to_value(&action).unwrap(), input);
    }

    #[test]
    fn display_handles_missing_parts() {
        assert_eq!(
            RemediationAction::new("scaling", "scale up").to_string(),
            "scale up (scaling)"
        );
        assert_eq!(RemediationAction::new("scaling", "").to_string(), "(scaling)");
        assert_eq!(RemediationAction::new("", "rollback").to_string(), "rollback");
        assert_eq!(RemediationAction::default().to_string(), "(unnamed action)");
    }
}

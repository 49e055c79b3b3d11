use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{RemediationAction, SequenceBase, SequenceStage};
use crate::validate::ValidationError;

/// A stage of a remediation plan: the generic stage shape extended with an
/// ordered list of corrective actions. Action order is execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemediationStage {
    #[serde(flatten)]
    pub stage: SequenceStage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RemediationAction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemediationStage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stage: SequenceStage::new(name),
            actions: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<RemediationAction>) -> Self {
        self.actions = actions;
        self
    }
}

/// A remediation plan: a sequence whose stages each carry an ordered list of
/// corrective actions.
///
/// The sequence attributes are held by composition and flattened on the wire,
/// so serialized plans keep the flat layout external producers emit. `stages`
/// defaults to empty and preserves insertion order; no deduplication happens.
/// Top-level fields this type does not declare are retained in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Remediation {
    #[serde(flatten)]
    pub sequence: SequenceBase,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<RemediationStage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Remediation {
    pub fn new(
        name: impl Into<String>,
        project: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            sequence: SequenceBase::new(name, project, service),
            stages: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Permissive reconstruction from an untyped value.
    ///
    /// Every top-level key of an object input is assigned onto a default
    /// instance: keys matching a declared field overwrite it when the value
    /// fits the field's type; everything else — unknown keys, or declared
    /// keys whose value has the wrong shape — is kept verbatim in `extra`.
    /// Nothing is dropped, nested content is never rewritten, and no input
    /// (including non-objects, which yield a default instance) makes this
    /// fail. Use [`Remediation::parse`] when malformed input must surface
    /// as an error instead of being absorbed.
    pub fn from_json(data: &Value) -> Self {
        let Value::Object(fields) = data else {
            return Self::default();
        };
        let mut plan = Self::default();
        for (key, value) in fields {
            if !plan.try_assign(key, value) {
                plan.extra.insert(key.clone(), value.clone());
            }
        }
        plan
    }

    /// Strict reconstruction: rejects non-object input and declared fields
    /// whose values do not match the expected shape. Semantic rules (required
    /// names, limits) live in [`RemediationValidator`](crate::validate::RemediationValidator).
    pub fn parse(data: &Value) -> Result<Self, ValidationError> {
        if !data.is_object() {
            return Err(ValidationError::NotAnObject);
        }
        serde_json::from_value(data.clone()).map_err(|e| ValidationError::InvalidShape {
            reason: e.to_string(),
        })
    }

    /// Total number of actions across all stages, in plan order.
    pub fn action_count(&self) -> usize {
        self.stages.iter().map(|s| s.actions.len()).sum()
    }

    fn try_assign(&mut self, key: &str, value: &Value) -> bool {
        fn set<T: DeserializeOwned>(slot: &mut T, value: &Value) -> bool {
            match serde_json::from_value(value.clone()) {
                Ok(parsed) => {
                    *slot = parsed;
                    true
                }
                Err(_) => false,
            }
        }

        match key {
            "stages" => set(&mut self.stages, value),
            "name" => set(&mut self.sequence.name, value),
            "project" => set(&mut self.sequence.project, value),
            "service" => set(&mut self.sequence.service, value),
            "context" => set(&mut self.sequence.context, value),
            "time" => set(&mut self.sequence.time, value),
            "state" => set(&mut self.sequence.state, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SequenceState;
    use serde_json::json;

    #[test]
    fn default_construction_has_empty_stages() {
        let plan = Remediation::default();
        assert!(plan.stages.is_empty());
        assert!(plan.extra.is_empty());
        assert_eq!(plan.sequence, SequenceBase::default());
    }

    #[test]
    fn from_json_copies_known_and_unknown_fields() {
        let input = json!({
            "stages": [{"actions": [{"id": "a1"}]}],
            "extra": 1
        });
        let plan = Remediation::from_json(&input);

        assert_eq!(plan.stages.len(), 1);
        assert_eq!(plan.stages[0].actions.len(), 1);
        assert_eq!(plan.stages[0].actions[0].extra.get("id"), Some(&json!("a1")));
        assert_eq!(plan.extra.get("extra"), Some(&json!(1)));
        // Structural equality with the input's stages.
        assert_eq!(
            serde_json::to_value(&plan.stages).unwrap(),
            input["stages"]
        );
    }

    #[test]
    fn from_json_empty_object_leaves_stages_absent() {
        let plan = Remediation::from_json(&json!({}));
        assert!(plan.stages.is_empty());
        assert!(plan.extra.is_empty());
        // No `stages` key appears in the serialized form.
        let round = serde_json::to_value(&plan).unwrap();
        assert_eq!(round, json!({"state": "triggered"}));
    }

    #[test]
    fn from_json_tolerates_non_object_input() {
        assert_eq!(Remediation::from_json(&Value::Null), Remediation::default());
        assert_eq!(Remediation::from_json(&json!(42)), Remediation::default());
        assert_eq!(
            Remediation::from_json(&json!(["not", "an", "object"])),
            Remediation::default()
        );
    }

    #[test]
    fn from_json_preserves_wrong_shaped_known_fields_raw() {
        let input = json!({"name": "carts-fix", "stages": "not-a-list"});
        let plan = Remediation::from_json(&input);
        assert_eq!(plan.sequence.name, "carts-fix");
        assert!(plan.stages.is_empty());
        assert_eq!(plan.extra.get("stages"), Some(&json!("not-a-list")));
    }

    #[test]
    fn from_json_passes_nested_content_through_unchanged() {
        let input = json!({
            "stages": [{
                "name": "production",
                "actions": [{"action": "scaling", "value": {"replicas": [1, 2, {"deep": true}]}}],
                "evaluation": {"score": 0.5}
            }]
        });
        let plan = Remediation::from_json(&input);
        assert_eq!(
            serde_json::to_value(&plan.stages).unwrap(),
            input["stages"]
        );
    }

    #[test]
    fn from_json_is_idempotent() {
        let input = json!({
            "name": "remediation-carts",
            "stages": [{"name": "production", "actions": []}],
            "custom": {"k": "v"}
        });
        let first = Remediation::from_json(&input);
        let second = Remediation::from_json(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn from_json_fills_sequence_fields() {
        let input = json!({
            "name": "remediation-carts",
            "project": "sockshop",
            "service": "carts",
            "context": "35383737",
            "state": "started"
        });
        let plan = Remediation::from_json(&input);
        assert_eq!(plan.sequence.name, "remediation-carts");
        assert_eq!(plan.sequence.project, "sockshop");
        assert_eq!(plan.sequence.state, SequenceState::Started);
        assert!(plan.extra.is_empty());
    }

    #[test]
    fn parse_rejects_non_object_input() {
        assert_eq!(
            Remediation::parse(&Value::Null),
            Err(ValidationError::NotAnObject)
        );
        assert_eq!(
            Remediation::parse(&json!(42)),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn parse_rejects_wrong_shaped_stages() {
        let err = Remediation::parse(&json!({"stages": "not-a-list"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidShape { .. }));
    }

    #[test]
    fn parse_accepts_well_formed_documents() {
        let plan = Remediation::parse(&json!({
            "name": "remediation-carts",
            "stages": [{"name": "production", "actions": [{"action": "scaling", "name": "scale up"}]}]
        }))
        .unwrap();
        assert_eq!(plan.stages.len(), 1);
        assert_eq!(plan.stages[0].actions[0].action, "scaling");
    }

    #[test]
    fn action_count_spans_stages() {
        let plan = Remediation::from_json(&json!({
            "stages": [
                {"name": "staging", "actions": [{"action": "scaling"}]},
                {"name": "production", "actions": [{"action": "scaling"}, {"action": "rollback"}]}
            ]
        }));
        assert_eq!(plan.action_count(), 3);
    }

    #[test]
    fn stage_order_is_preserved() {
        let plan = Remediation::from_json(&json!({
            "stages": [{"name": "dev"}, {"name": "staging"}, {"name": "production"}]
        }));
        let names: Vec<&str> = plan.stages.iter().map(|s| s.stage.name.as_str()).collect();
        assert_eq!(names, vec!["dev", "staging", "production"]);
    }
}

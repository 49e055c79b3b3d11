//! Derived summary of a remediation plan for display.

use serde::Serialize;

use crate::model::{Remediation, SequenceState};

/// Flattened view of a plan: identity, state, and the stage/action listing
/// in plan order. Serializable for `show --json`.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub name: String,
    pub project: String,
    pub service: String,
    pub state: SequenceState,
    pub stage_count: usize,
    pub action_count: usize,
    pub stages: Vec<StageReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub name: String,
    pub state: Option<SequenceState>,
    /// One display line per action, in execution order.
    pub actions: Vec<String>,
}

impl PlanReport {
    pub fn from_plan(plan: &Remediation) -> Self {
        let stages: Vec<StageReport> = plan
            .stages
            .iter()
            .map(|stage| StageReport {
                name: stage.stage.name.clone(),
                state: stage.stage.state,
                actions: stage.actions.iter().map(|a| a.to_string()).collect(),
            })
            .collect();

        Self {
            name: plan.sequence.name.clone(),
            project: plan.sequence.project.clone(),
            service: plan.sequence.service.clone(),
            state: plan.sequence.state,
            stage_count: stages.len(),
            action_count: plan.action_count(),
            stages,
        }
    }
}

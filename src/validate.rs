//! Semantic validation of remediation plans.
//!
//! [`Remediation::parse`](crate::model::Remediation::parse) only enforces
//! shape; [`RemediationValidator`] enforces the rules that make a parsed plan
//! actually usable: required names, required action fields, and configured
//! size limits. Strict mode additionally rejects unknown fields on plans and
//! stages. Action payloads stay free-form by contract, so action-level extras
//! are never rejected.

use thiserror::Error;

use crate::config::RemedianConfig;
use crate::model::{Remediation, RemediationStage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("remediation document must be a JSON object")]
    NotAnObject,

    #[error("document does not match the remediation shape: {reason}")]
    InvalidShape { reason: String },

    #[error("remediation name must not be empty")]
    MissingName,

    #[error("stage {index} has no name")]
    UnnamedStage { index: usize },

    #[error("stage `{stage}`: action {index} is missing the `{field}` field")]
    IncompleteAction {
        stage: String,
        index: usize,
        field: &'static str,
    },

    #[error("plan declares {count} stages, limit is {limit}")]
    TooManyStages { count: usize, limit: usize },

    #[error("stage `{stage}` declares {count} actions, limit is {limit}")]
    TooManyActions {
        stage: String,
        count: usize,
        limit: usize,
    },

    #[error("unknown field `{field}` on {location} rejected in strict mode")]
    UnknownField { field: String, location: String },
}

/// Walks a plan and returns the first rule violation found, in document order.
pub struct RemediationValidator {
    max_stages: usize,
    max_actions_per_stage: usize,
    strict: bool,
}

impl RemediationValidator {
    pub fn from_config(config: &RemedianConfig) -> Self {
        Self {
            max_stages: config.max_stages,
            max_actions_per_stage: config.max_actions_per_stage,
            strict: config.strict,
        }
    }

    pub fn validate(&self, plan: &Remediation) -> Result<(), ValidationError> {
        if plan.sequence.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        if plan.stages.len() > self.max_stages {
            return Err(ValidationError::TooManyStages {
                count: plan.stages.len(),
                limit: self.max_stages,
            });
        }

        if self.strict
            && let Some(field) = plan.extra.keys().next()
        {
            return Err(ValidationError::UnknownField {
                field: field.clone(),
                location: "plan".to_string(),
            });
        }

        for (index, stage) in plan.stages.iter().enumerate() {
            self.validate_stage(index, stage)?;
        }

        Ok(())
    }

    fn validate_stage(
        &self,
        index: usize,
        stage: &RemediationStage,
    ) -> Result<(), ValidationError> {
        if stage.stage.name.trim().is_empty() {
            return Err(ValidationError::UnnamedStage { index });
        }

        if stage.actions.len() > self.max_actions_per_stage {
            return Err(ValidationError::TooManyActions {
                stage: stage.stage.name.clone(),
                count: stage.actions.len(),
                limit: self.max_actions_per_stage,
            });
        }

        if self.strict
            && let Some(field) = stage.extra.keys().next()
        {
            return Err(ValidationError::UnknownField {
                field: field.clone(),
                location: format!("stage `{}`", stage.stage.name),
            });
        }

        for (action_index, action) in stage.actions.iter().enumerate() {
            let missing = if action.action.trim().is_empty() {
                Some("action")
            } else if action.name.trim().is_empty() {
                Some("name")
            } else {
                None
            };
            if let Some(field) = missing {
                return Err(ValidationError::IncompleteAction {
                    stage: stage.stage.name.clone(),
                    index: action_index,
                    field,
                });
            }
        }

        Ok(())
    }
}

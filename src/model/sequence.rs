use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of a sequence or of one of its stages.
///
/// Serialized in the wire format used by the documents this crate consumes
/// (`triggered`, `started`, ..., `timedOut`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceState {
    #[default]
    Triggered,
    Started,
    Finished,
    Errored,
    TimedOut,
    Aborted,
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceState::Triggered => write!(f, "triggered"),
            SequenceState::Started => write!(f, "started"),
            SequenceState::Finished => write!(f, "finished"),
            SequenceState::Errored => write!(f, "errored"),
            SequenceState::TimedOut => write!(f, "timedOut"),
            SequenceState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Attributes every sequence carries, remediation plans included.
///
/// Embedded into [`Remediation`](crate::model::Remediation) by composition and
/// flattened on the wire, so serialized documents keep the flat field layout
/// external producers expect. All fields tolerate absence; `new` fills in a
/// generated context and trigger time for locally constructed plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceBase {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service: String,
    /// Correlation identifier tying the sequence to its triggering context.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: SequenceState,
}

impl SequenceBase {
    pub fn new(
        name: impl Into<String>,
        project: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            service: service.into(),
            context: Uuid::new_v4().to_string(),
            time: Some(Utc::now()),
            state: SequenceState::Triggered,
        }
    }
}

/// A single step within a sequence.
///
/// Remediation stages extend this shape with an action list, see
/// [`RemediationStage`](crate::model::RemediationStage).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceStage {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SequenceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl SequenceStage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: None,
            time: None,
        }
    }
}

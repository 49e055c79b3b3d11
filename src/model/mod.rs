mod action;
mod remediation;
mod sequence;

pub use action::RemediationAction;
pub use remediation::{Remediation, RemediationStage};
pub use sequence::{SequenceBase, SequenceStage, SequenceState};

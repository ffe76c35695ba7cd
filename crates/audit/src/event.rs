//! Event types for the decision log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a bridge instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BridgeId(pub Uuid);

impl BridgeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BridgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BridgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of one guarded invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The call passed classification and returned normally.
    Allowed { owner: String, member: String },
    /// The call was rejected before dispatch.
    Denied { owner: String, member: String },
    /// The call passed classification but faulted during dispatch.
    Faulted {
        owner: String,
        member: String,
        fault: String,
    },
}

impl Outcome {
    pub fn allowed(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self::Allowed {
            owner: owner.into(),
            member: member.into(),
        }
    }

    pub fn denied(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self::Denied {
            owner: owner.into(),
            member: member.into(),
        }
    }

    pub fn faulted(
        owner: impl Into<String>,
        member: impl Into<String>,
        fault: impl Into<String>,
    ) -> Self {
        Self::Faulted {
            owner: owner.into(),
            member: member.into(),
            fault: fault.into(),
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

/// An event in the decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub bridge_id: BridgeId,
    pub timestamp: DateTime<Utc>,
    pub outcome: Outcome,
}

impl Event {
    pub fn new(bridge_id: BridgeId, outcome: Outcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            bridge_id,
            timestamp: Utc::now(),
            outcome,
        }
    }
}

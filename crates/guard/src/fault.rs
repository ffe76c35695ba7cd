//! Fault values crossing the dispatcher seam.

use serde::{Deserialize, Serialize};

/// A cause-chained fault raised somewhere beneath a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    pub message: String,
    pub cause: Option<Box<Fault>>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: Fault) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Fault {}

/// The wrapping fault a dispatcher's privileged call raises.
///
/// Mirrors the shapes the guard must normalize: a bare wrapper with no
/// underlying cause, a wrapper around the invoked member's own fault, or a
/// wrapper around a failure of the dispatch plumbing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFault {
    pub message: String,
    pub cause: Option<DispatchCause>,
}

/// What actually failed beneath the wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCause {
    /// The invoked member itself threw. Its own `cause` chain, if any, is
    /// preserved on the fault.
    Target(Fault),
    /// The dispatch mechanism failed around the member (bad target, arity
    /// mismatch, access failure).
    Mechanism(Fault),
}

impl DispatchFault {
    /// A wrapper with no underlying cause.
    pub fn bare(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// The invoked member threw `fault`.
    pub fn target(fault: Fault) -> Self {
        Self {
            message: "privileged action failed".to_string(),
            cause: Some(DispatchCause::Target(fault)),
        }
    }

    /// The dispatch plumbing failed with `fault`.
    pub fn mechanism(fault: Fault) -> Self {
        Self {
            message: "privileged action failed".to_string(),
            cause: Some(DispatchCause::Mechanism(fault)),
        }
    }
}

impl std::fmt::Display for DispatchFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            None => write!(f, "{}", self.message),
            Some(DispatchCause::Target(fault)) => write!(f, "{}: target: {fault}", self.message),
            Some(DispatchCause::Mechanism(fault)) => write!(f, "{}: {fault}", self.message),
        }
    }
}

impl std::error::Error for DispatchFault {}

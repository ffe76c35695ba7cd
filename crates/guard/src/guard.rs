//! The decision-and-dispatch procedure.

use std::sync::Arc;

use policy::{Decision, InvocationPolicy};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    DispatchCause, DispatchFault, Dispatcher, Error, MethodDescriptor, RestrictedContext, Result,
};

/// Capability-gated invocation guard.
///
/// Classifies each call against the injected policy, then dispatches it
/// exactly once through the injected dispatcher under the caller's
/// restricted context. Holds no mutable state; concurrent invocations are
/// independent.
pub struct Guard {
    policy: Arc<dyn InvocationPolicy>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl Guard {
    pub fn new(policy: Arc<dyn InvocationPolicy>, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { policy, dispatcher }
    }

    /// Vet and perform one reflective invocation.
    ///
    /// Rejection happens before any dispatch and has no side effects. A
    /// permitted call runs with real side effects; its faults surface to the
    /// caller per the normalization rules on [`DispatchFault`].
    pub fn invoke(
        &self,
        descriptor: &MethodDescriptor,
        target: Option<&Value>,
        args: &[Value],
        context: &RestrictedContext,
    ) -> Result<Value> {
        match self.policy.classify(&descriptor.owner, &descriptor.name) {
            Decision::Allow => {}
            Decision::Deny => {
                debug!(%descriptor, context = context.label(), "invocation denied");
                return Err(Error::CapabilityDenied);
            }
        }

        self.dispatcher
            .dispatch(descriptor, target, args, context)
            .map_err(|fault| {
                warn!(%descriptor, %fault, "dispatch faulted");
                normalize(fault)
            })
    }
}

/// Collapse a dispatch fault into the caller-visible taxonomy.
///
/// A bare wrapper propagates as a privilege fault. A target fault that
/// itself wraps a deeper cause is unwrapped by exactly one level; a target
/// fault without one propagates as-is. Mechanism faults propagate verbatim.
fn normalize(fault: DispatchFault) -> Error {
    match fault.cause {
        None => Error::Privilege(crate::Fault::new(fault.message)),
        Some(DispatchCause::Target(target)) => match target.cause {
            Some(inner) => Error::Invocation(*inner),
            None => Error::Invocation(target),
        },
        Some(DispatchCause::Mechanism(mechanism)) => Error::Privilege(mechanism),
    }
}

//! Bridge assembly: guard, registry, and decision log.

use std::sync::{Arc, Mutex};

use audit::{BridgeId, DecisionLog, Event, Outcome};
use guard::{Error, Guard, MethodDescriptor, RestrictedContext, Result};
use policy::InvocationPolicy;
use serde_json::Value;
use tracing::warn;

use crate::HostRegistry;

/// One embedding surface: an invocation guard wired to a host registry.
///
/// All parts are injected; nothing here is process-global. Build the bridge
/// at startup and share it read-only across concurrent callers.
pub struct Bridge {
    id: BridgeId,
    guard: Guard,
    log: Option<Mutex<DecisionLog>>,
}

impl Bridge {
    pub fn new(policy: Arc<dyn InvocationPolicy>, registry: Arc<HostRegistry>) -> Self {
        Self {
            id: BridgeId::new(),
            guard: Guard::new(policy, registry),
            log: None,
        }
    }

    /// Record every decision this bridge makes in `log`.
    pub fn with_log(mut self, log: DecisionLog) -> Self {
        self.log = Some(Mutex::new(log));
        self
    }

    pub fn id(&self) -> BridgeId {
        self.id
    }

    /// Vet, dispatch, and record one reflective invocation.
    pub fn invoke(
        &self,
        descriptor: &MethodDescriptor,
        target: Option<&Value>,
        args: &[Value],
        context: &RestrictedContext,
    ) -> Result<Value> {
        let result = self.guard.invoke(descriptor, target, args, context);
        self.record(descriptor, &result);
        result
    }

    /// Logging never changes the invocation outcome; a failed append is
    /// reported and dropped.
    fn record(&self, descriptor: &MethodDescriptor, result: &Result<Value>) {
        let Some(log) = &self.log else { return };

        let outcome = match result {
            Ok(_) => Outcome::allowed(&descriptor.owner, &descriptor.name),
            Err(Error::CapabilityDenied) => Outcome::denied(&descriptor.owner, &descriptor.name),
            Err(fault) => {
                Outcome::faulted(&descriptor.owner, &descriptor.name, fault.to_string())
            }
        };

        let log = match log.lock() {
            Ok(log) => log,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = log.append(&Event::new(self.id, outcome)) {
            warn!(%descriptor, error = %e, "failed to record decision");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostClass;
    use guard::Fault;
    use policy::RuleSet;
    use serde_json::json;

    fn bridge() -> Bridge {
        let mut registry = HostRegistry::new("java.lang.Class");
        registry.register(
            HostClass::new("com.example.Widget")
                .method("render", 0, |_, _| Ok(json!("<widget/>")))
                .method("explode", 0, |_, _| Err(Fault::new("widget exploded"))),
        );
        Bridge::new(Arc::new(RuleSet::builtin()), Arc::new(registry))
            .with_log(DecisionLog::in_memory().unwrap())
    }

    fn ctx() -> RestrictedContext {
        RestrictedContext::new("page:example.org")
    }

    fn logged(bridge: &Bridge) -> Vec<Event> {
        let log = bridge.log.as_ref().unwrap().lock().unwrap();
        log.load_bridge(bridge.id()).unwrap()
    }

    #[test]
    fn metadata_get_name_returns_the_type_name() {
        let bridge = bridge();
        let d = MethodDescriptor::nullary("java.lang.Class", "getName");
        let value = bridge
            .invoke(&d, Some(&json!("com.example.Widget")), &[], &ctx())
            .unwrap();
        assert_eq!(value, json!("com.example.Widget"));
    }

    #[test]
    fn denied_call_never_reaches_the_registry() {
        let bridge = bridge();
        let d = MethodDescriptor::new("java.lang.Class", "forName", ["java.lang.String"]);
        let err = bridge
            .invoke(&d, None, &[json!("com.example.Widget")], &ctx())
            .unwrap_err();
        assert!(matches!(err, Error::CapabilityDenied));

        let events = logged(&bridge);
        assert_eq!(events.len(), 1);
        assert!(events[0].outcome.is_denied());
    }

    #[test]
    fn every_invocation_is_recorded_once() {
        let bridge = bridge();
        let ctx = ctx();

        let render = MethodDescriptor::nullary("com.example.Widget", "render");
        let explode = MethodDescriptor::nullary("com.example.Widget", "explode");
        let exec = MethodDescriptor::new("java.lang.Runtime", "exec", ["java.lang.String"]);

        bridge.invoke(&render, None, &[], &ctx).unwrap();
        bridge.invoke(&explode, None, &[], &ctx).unwrap_err();
        bridge.invoke(&exec, None, &[json!("ls")], &ctx).unwrap_err();

        let events = logged(&bridge);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0].outcome, Outcome::Allowed { .. }));
        assert!(matches!(events[1].outcome, Outcome::Faulted { .. }));
        assert!(matches!(events[2].outcome, Outcome::Denied { .. }));
    }

    #[test]
    fn member_fault_surfaces_as_invocation_fault() {
        let bridge = bridge();
        let d = MethodDescriptor::nullary("com.example.Widget", "explode");
        match bridge.invoke(&d, None, &[], &ctx()).unwrap_err() {
            Error::Invocation(fault) => assert_eq!(fault.message, "widget exploded"),
            other => panic!("expected invocation fault, got {other:?}"),
        }
    }
}

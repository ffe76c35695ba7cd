//! Registry of invokable host types.

use std::collections::HashMap;

use guard::{DispatchFault, Dispatcher, Fault, MethodDescriptor, RestrictedContext};
use serde_json::Value;
use tracing::debug;

use crate::metadata;

type HostFn = Box<dyn Fn(Option<&Value>, &[Value]) -> Result<Value, Fault> + Send + Sync>;

struct HostMethod {
    arity: usize,
    body: HostFn,
}

/// One host type: a fully-qualified name and its invokable members.
pub struct HostClass {
    name: String,
    interface: bool,
    methods: HashMap<String, HostMethod>,
}

impl HostClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interface: false,
            methods: HashMap::new(),
        }
    }

    /// Mark this host type as an interface, visible through the metadata
    /// member `isInterface`.
    pub fn interface(mut self) -> Self {
        self.interface = true;
        self
    }

    /// Register a member. A fault returned by `body` is the member's own
    /// fault and surfaces to the script as an invocation fault.
    pub fn method(
        mut self,
        name: impl Into<String>,
        arity: usize,
        body: impl Fn(Option<&Value>, &[Value]) -> Result<Value, Fault> + Send + Sync + 'static,
    ) -> Self {
        self.methods.insert(
            name.into(),
            HostMethod {
                arity,
                body: Box::new(body),
            },
        );
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Registry of host types, acting as the privileged dispatcher.
///
/// Built once at startup, then shared read-only behind an `Arc`; dispatch
/// takes `&self` and mutation after sharing is not possible.
pub struct HostRegistry {
    metadata_type: String,
    classes: HashMap<String, HostClass>,
}

impl HostRegistry {
    /// Create a registry whose metadata members answer for `metadata_type`.
    /// The name must match the policy's `metadata_type` for whitelisted
    /// introspection calls to resolve here.
    pub fn new(metadata_type: impl Into<String>) -> Self {
        Self {
            metadata_type: metadata_type.into(),
            classes: HashMap::new(),
        }
    }

    pub fn register(&mut self, class: HostClass) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.classes.contains_key(type_name)
    }

    /// Whether `type_name` is registered as an interface. Unregistered
    /// types are not interfaces as far as this registry can tell.
    pub fn is_interface(&self, type_name: &str) -> bool {
        self.classes.get(type_name).is_some_and(|c| c.interface)
    }

    fn resolve(&self, descriptor: &MethodDescriptor) -> Result<&HostMethod, DispatchFault> {
        let class = self.classes.get(&descriptor.owner).ok_or_else(|| {
            DispatchFault::mechanism(Fault::new(format!(
                "unknown host type: {}",
                descriptor.owner
            )))
        })?;
        let method = class.methods.get(&descriptor.name).ok_or_else(|| {
            DispatchFault::mechanism(Fault::new(format!(
                "no such member: {}#{}",
                descriptor.owner, descriptor.name
            )))
        })?;
        if descriptor.arity() != method.arity {
            return Err(DispatchFault::mechanism(Fault::new(format!(
                "arity mismatch for {}#{}: declared {}, registered {}",
                descriptor.owner,
                descriptor.name,
                descriptor.arity(),
                method.arity
            ))));
        }
        Ok(method)
    }
}

impl Dispatcher for HostRegistry {
    fn dispatch(
        &self,
        descriptor: &MethodDescriptor,
        target: Option<&Value>,
        args: &[Value],
        context: &RestrictedContext,
    ) -> Result<Value, DispatchFault> {
        // Privilege scope is exactly this call: the context lives only for
        // the duration of the dispatch.
        debug!(%descriptor, context = context.label(), "dispatching");

        if descriptor.owner == self.metadata_type {
            return metadata::dispatch(descriptor, target, |name| self.is_interface(name));
        }

        let method = self.resolve(descriptor)?;
        if args.len() != method.arity {
            return Err(DispatchFault::mechanism(Fault::new(format!(
                "{}#{} takes {} argument(s), got {}",
                descriptor.owner,
                descriptor.name,
                method.arity,
                args.len()
            ))));
        }

        (method.body)(target, args).map_err(DispatchFault::target)
    }
}

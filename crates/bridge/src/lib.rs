//! Host-side bridge over the invocation guard.
//!
//! This crate provides the pieces an embedder wires together to expose a
//! reflective surface to untrusted script:
//!
//! - **HostRegistry**: host types registered as named method tables. It
//!   implements the guard's [`Dispatcher`](guard::Dispatcher) seam and also
//!   answers the introspection members of the type-metadata type
//!   (`getName`, `getSimpleName`, ...).
//! - **Bridge**: guard + registry + optional decision log, assembled from
//!   explicitly injected parts. One `Bridge` per embedding surface; build it
//!   at startup, share it read-only afterwards.
//!
//! # Example
//!
//! ```
//! use bridge::{Bridge, HostClass, HostRegistry};
//! use guard::{Fault, MethodDescriptor, RestrictedContext};
//! use policy::RuleSet;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let mut registry = HostRegistry::new("java.lang.Class");
//! registry.register(HostClass::new("com.example.Greeter").method(
//!     "greet",
//!     1,
//!     |_target, args| match &args[0] {
//!         serde_json::Value::String(name) => Ok(json!(format!("hello, {name}"))),
//!         _ => Err(Fault::new("greet expects a string")),
//!     },
//! ));
//!
//! let bridge = Bridge::new(Arc::new(RuleSet::builtin()), Arc::new(registry));
//! let ctx = RestrictedContext::new("page:example.org");
//! let d = MethodDescriptor::new("com.example.Greeter", "greet", ["java.lang.String"]);
//! let value = bridge.invoke(&d, None, &[json!("sailor")], &ctx).unwrap();
//! assert_eq!(value, json!("hello, sailor"));
//! ```

mod bridge;
mod metadata;
mod registry;

pub use bridge::Bridge;
pub use registry::{HostClass, HostRegistry};

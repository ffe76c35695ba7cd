//! Gangway invocation guard — gated reflective dispatch.
//!
//! The guard sits between a script-to-host bridge and the host's reflective
//! surface. The bridge hands it an already-resolved [`MethodDescriptor`], a
//! target value, an argument list, and an opaque [`RestrictedContext`]; the
//! guard classifies the call against an injected [`InvocationPolicy`] and,
//! if allowed, dispatches it exactly once through an injected [`Dispatcher`]
//! under that context.
//!
//! # Overview
//!
//! - **MethodDescriptor**: identity of the member being invoked — owning
//!   type name, member name, declared parameter types.
//! - **RestrictedContext**: a capability token minted by the embedder and
//!   threaded verbatim into the dispatch; the guard never constructs one.
//! - **Dispatcher**: the privileged-call seam. Implementations perform the
//!   actual reflective call and report faults as [`DispatchFault`] values,
//!   which the guard normalizes into [`Error::Invocation`] or
//!   [`Error::Privilege`].
//!
//! Rejections are side-effect free and carry a fixed message; faults from
//! the invoked member surface to the caller untouched (unwrapped by exactly
//! one level when the member's own fault wraps a deeper cause). The guard
//! never retries and never swallows a fault.
//!
//! # Example
//!
//! ```ignore
//! use guard::{Guard, MethodDescriptor, RestrictedContext};
//! use policy::RuleSet;
//! use std::sync::Arc;
//!
//! let guard = Guard::new(Arc::new(RuleSet::builtin()), dispatcher);
//! let descriptor = MethodDescriptor::new("java.lang.String", "length", []);
//! let ctx = RestrictedContext::new("page:example.org");
//! let value = guard.invoke(&descriptor, Some(&target), &[], &ctx)?;
//! ```

mod context;
mod descriptor;
mod dispatch;
mod error;
mod fault;
mod guard;

pub use context::RestrictedContext;
pub use descriptor::MethodDescriptor;
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use fault::{DispatchCause, DispatchFault, Fault};
pub use guard::Guard;

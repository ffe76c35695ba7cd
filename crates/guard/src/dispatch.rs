//! Privileged dispatch seam.

use crate::{DispatchFault, MethodDescriptor, RestrictedContext};
use serde_json::Value;

/// Trait for privileged reflective dispatchers.
///
/// Implementations perform the actual member call under the supplied
/// restricted context, scoped to exactly this one call. The guard has
/// already vetted the descriptor by the time `dispatch` runs.
///
/// The member may block arbitrarily or run arbitrary code; the guard imposes
/// no timeout or cancellation on it.
pub trait Dispatcher: Send + Sync {
    /// Invoke the member identified by `descriptor` on `target` with `args`.
    ///
    /// `target` is `None` for static members. Faults are reported through
    /// [`DispatchFault`]; the guard normalizes them for the caller.
    fn dispatch(
        &self,
        descriptor: &MethodDescriptor,
        target: Option<&Value>,
        args: &[Value],
        context: &RestrictedContext,
    ) -> Result<Value, DispatchFault>;
}

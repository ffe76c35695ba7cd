//! Reduced-privilege context token.

use serde_json::Value;
use std::sync::Arc;

/// Opaque capability token for a reduced-privilege execution environment.
///
/// Minted by the embedding bridge, never by the guard; the guard threads it
/// verbatim into every dispatch. Cloning shares the same token.
#[derive(Debug, Clone)]
pub struct RestrictedContext {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    label: String,
    grants: Value,
}

impl RestrictedContext {
    /// Mint a context with a label and no grants payload.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_grants(label, Value::Null)
    }

    /// Mint a context carrying an opaque grants payload for the dispatcher.
    pub fn with_grants(label: impl Into<String>, grants: Value) -> Self {
        Self {
            inner: Arc::new(Inner {
                label: label.into(),
                grants,
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// The grants payload, opaque to the guard.
    pub fn grants(&self) -> &Value {
        &self.inner.grants
    }
}

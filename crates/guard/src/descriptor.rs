//! Reflective member identity.

use serde::{Deserialize, Serialize};

/// Identity of a reflective member being invoked.
///
/// Immutable and supplied per call by the bridge; the guard never resolves
/// descriptors itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Fully-qualified name of the declaring type.
    pub owner: String,
    /// Member name.
    pub name: String,
    /// Declared parameter type names, in order.
    pub params: Vec<String>,
}

impl MethodDescriptor {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Descriptor for a member with no parameters.
    pub fn nullary(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(owner, name, Vec::<String>::new())
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}({})", self.owner, self.name, self.params.join(", "))
    }
}

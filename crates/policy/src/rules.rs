//! Rule set data loaded from TOML.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Data-driven invocation rules.
///
/// Three fixed rule sets: a whitelist of members callable on the
/// type-metadata type, a blacklist of exact type names, and a blacklist of
/// package prefixes matched on a `.` boundary. All three are immutable after
/// construction and safe to share across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Fully-qualified name of the type-metadata type (the type whose
    /// instances describe other types).
    #[serde(default = "default_metadata_type")]
    pub metadata_type: String,

    /// Members permitted on the type-metadata type. Everything else on that
    /// type is denied.
    #[serde(default)]
    pub metadata_methods: HashSet<String>,

    /// Exact fully-qualified type names whose members are never invokable.
    #[serde(default)]
    pub denied_types: HashSet<String>,

    /// Package prefixes denied in full; a type is covered when its name
    /// starts with the prefix followed by `.`.
    #[serde(default)]
    pub denied_packages: Vec<String>,
}

fn default_metadata_type() -> String {
    "java.lang.Class".to_string()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// Load rules from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse rules from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        let rules: Self = toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// The stock rules for hosts exposing a JVM-style reflective surface:
    /// read-only introspection on the metadata type, no class loading, no
    /// process or module control, no reflection-on-reflection.
    pub fn builtin() -> Self {
        Self {
            metadata_type: default_metadata_type(),
            metadata_methods: as_set(&[
                "getCanonicalName",
                "getEnumConstants",
                "getFields",
                "getMethods",
                "getName",
                "getPackageName",
                "getSimpleName",
                "getSuperclass",
                "getTypeName",
                "getTypeParameters",
                "isAssignableFrom",
                "isArray",
                "isEnum",
                "isInstance",
                "isInterface",
                "isLocalClass",
                "isMemberClass",
                "isPrimitive",
                "isSynthetic",
                "toGenericString",
                "toString",
            ]),
            denied_types: as_set(&[
                "java.lang.ClassLoader",
                "java.lang.Module",
                "java.lang.Runtime",
                "java.lang.System",
            ]),
            denied_packages: vec![
                "java.lang.invoke".to_string(),
                "java.lang.module".to_string(),
                "java.lang.reflect".to_string(),
                "java.security".to_string(),
                "sun.misc".to_string(),
            ],
        }
    }

    /// Check structural validity of the rule data.
    ///
    /// Package prefixes must be non-empty and must not end in `.`, since the
    /// boundary dot is appended at match time.
    pub fn validate(&self) -> Result<()> {
        if self.metadata_type.is_empty() {
            return Err(Error::Invalid("metadata_type must not be empty".into()));
        }
        for prefix in &self.denied_packages {
            if prefix.is_empty() {
                return Err(Error::Invalid("empty package prefix".into()));
            }
            if prefix.starts_with('.') || prefix.ends_with('.') {
                return Err(Error::Invalid(format!(
                    "package prefix has a dangling dot: {prefix}"
                )));
            }
        }
        Ok(())
    }
}

fn as_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

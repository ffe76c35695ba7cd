//! Classification of reflective invocations.

use crate::RuleSet;

/// Result of classifying an invocation.
///
/// Denial carries no reason on purpose: callers must not be able to probe
/// which rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Policy seam for the invocation guard.
///
/// Implementations classify a member by its owning type name and member name
/// alone. [`RuleSet`] is the stock data-driven implementation; alternative
/// policies (signed allow-lists, per-origin rules) substitute here without
/// touching the dispatch path.
pub trait InvocationPolicy: Send + Sync {
    /// Classify an invocation of `member` declared on `owner`.
    fn classify(&self, owner: &str, member: &str) -> Decision;
}

impl InvocationPolicy for RuleSet {
    fn classify(&self, owner: &str, member: &str) -> Decision {
        // Malformed type names would slip past the dot-boundary package
        // match below; deny them outright.
        if !well_formed(owner) {
            return Decision::Deny;
        }

        // Members of the metadata type are introspection-only: whitelist.
        if owner == self.metadata_type {
            return if self.metadata_methods.contains(member) {
                Decision::Allow
            } else {
                Decision::Deny
            };
        }

        if self.denied_types.contains(owner) {
            return Decision::Deny;
        }

        // Boundary match: "java.security" covers "java.security.X" but not
        // "java.securityx.X".
        for prefix in &self.denied_packages {
            if owner.starts_with(&format!("{prefix}.")) {
                return Decision::Deny;
            }
        }

        Decision::Allow
    }
}

fn well_formed(owner: &str) -> bool {
    !owner.is_empty() && owner.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::builtin()
    }

    #[test]
    fn metadata_whitelist_allows_get_name() {
        assert!(rules().classify("java.lang.Class", "getName").is_allowed());
    }

    #[test]
    fn metadata_whitelist_denies_for_name() {
        assert_eq!(rules().classify("java.lang.Class", "forName"), Decision::Deny);
    }

    #[test]
    fn type_blacklist_denies_regardless_of_member() {
        let r = rules();
        assert_eq!(r.classify("java.lang.Runtime", "exec"), Decision::Deny);
        assert_eq!(r.classify("java.lang.Runtime", "toString"), Decision::Deny);
        assert_eq!(r.classify("java.lang.System", "currentTimeMillis"), Decision::Deny);
    }

    #[test]
    fn package_blacklist_denies_on_dot_boundary() {
        let r = rules();
        assert_eq!(
            r.classify("java.security.AccessController", "doPrivileged"),
            Decision::Deny
        );
        assert_eq!(r.classify("java.lang.reflect.Method", "invoke"), Decision::Deny);
        assert_eq!(r.classify("sun.misc.Unsafe", "getUnsafe"), Decision::Deny);
    }

    #[test]
    fn package_blacklist_is_not_a_substring_match() {
        let r = rules();
        assert!(r.classify("java.securityutils.Foo", "bar").is_allowed());
        assert!(r.classify("sun.miscellany.Tool", "run").is_allowed());
    }

    #[test]
    fn type_named_exactly_like_prefix_is_not_package_matched() {
        // No trailing segment, so the package rule does not apply.
        assert!(rules().classify("java.security", "anything").is_allowed());
    }

    #[test]
    fn ordinary_types_are_allowed() {
        assert!(rules().classify("java.lang.String", "length").is_allowed());
        assert!(rules().classify("com.example.Widget", "render").is_allowed());
    }

    #[test]
    fn malformed_owner_is_denied() {
        let r = rules();
        assert_eq!(r.classify("", "foo"), Decision::Deny);
        assert_eq!(r.classify(".java.lang.String", "length"), Decision::Deny);
        assert_eq!(r.classify("java..lang.String", "length"), Decision::Deny);
        assert_eq!(r.classify("java.lang.String.", "length"), Decision::Deny);
    }

    #[test]
    fn custom_rules_substitute_cleanly() {
        let rules = RuleSet::parse(
            r#"
metadata_type = "sys.Type"
metadata_methods = ["name"]
denied_packages = ["sys.unsafe"]
"#,
        )
        .unwrap();
        assert!(rules.classify("sys.Type", "name").is_allowed());
        assert_eq!(rules.classify("sys.Type", "load"), Decision::Deny);
        assert_eq!(rules.classify("sys.unsafe.Ptr", "read"), Decision::Deny);
        assert!(rules.classify("java.lang.Runtime", "exec").is_allowed());
    }
}

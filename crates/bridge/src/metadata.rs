//! Introspection members of the type-metadata type.
//!
//! When script holds a type-metadata value (the reflective "class of a
//! class"), the whitelisted members it may call are pure functions of the
//! subject type's name. The subject travels as the dispatch target: a string
//! carrying the fully-qualified name.

use guard::{DispatchFault, Fault, MethodDescriptor};
use serde_json::{Value, json};

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

pub(crate) fn dispatch(
    descriptor: &MethodDescriptor,
    target: Option<&Value>,
    is_interface: impl Fn(&str) -> bool,
) -> Result<Value, DispatchFault> {
    let subject = match target.and_then(Value::as_str) {
        Some(name) => name,
        None => {
            return Err(DispatchFault::mechanism(Fault::new(
                "metadata call requires a type-name target",
            )));
        }
    };

    member(&descriptor.name, subject, is_interface).ok_or_else(|| {
        DispatchFault::mechanism(Fault::new(format!(
            "unsupported metadata member: {}",
            descriptor.name
        )))
    })
}

/// Answer one metadata member for `subject`, or `None` if the member cannot
/// be derived from the name and the registry alone.
fn member(name: &str, subject: &str, is_interface: impl Fn(&str) -> bool) -> Option<Value> {
    let value = match name {
        "getName" | "getTypeName" | "getCanonicalName" => json!(subject),
        "getSimpleName" => json!(simple_name(subject)),
        "getPackageName" => json!(package_name(subject)),
        "toString" | "toGenericString" => json!(format!("class {subject}")),
        "isArray" => json!(subject.ends_with("[]")),
        "isPrimitive" => json!(PRIMITIVES.contains(&subject)),
        "isInterface" => json!(is_interface(subject)),
        _ => return None,
    };
    Some(value)
}

fn simple_name(subject: &str) -> &str {
    let base = subject.trim_end_matches("[]");
    base.rsplit('.').next().unwrap_or(base)
}

fn package_name(subject: &str) -> &str {
    match subject.rfind('.') {
        Some(idx) => &subject[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_interfaces(_: &str) -> bool {
        false
    }

    #[test]
    fn get_name_returns_the_subject() {
        assert_eq!(
            member("getName", "java.lang.String", no_interfaces).unwrap(),
            json!("java.lang.String")
        );
    }

    #[test]
    fn simple_and_package_names_split_on_the_last_dot() {
        assert_eq!(
            member("getSimpleName", "java.lang.String", no_interfaces).unwrap(),
            json!("String")
        );
        assert_eq!(
            member("getPackageName", "java.lang.String", no_interfaces).unwrap(),
            json!("java.lang")
        );
        assert_eq!(member("getPackageName", "TopLevel", no_interfaces).unwrap(), json!(""));
    }

    #[test]
    fn array_and_primitive_flags() {
        assert_eq!(member("isArray", "java.lang.String[]", no_interfaces).unwrap(), json!(true));
        assert_eq!(member("isArray", "java.lang.String", no_interfaces).unwrap(), json!(false));
        assert_eq!(member("isPrimitive", "int", no_interfaces).unwrap(), json!(true));
        assert_eq!(
            member("isPrimitive", "java.lang.Integer", no_interfaces).unwrap(),
            json!(false)
        );
    }

    #[test]
    fn interface_flag_comes_from_the_lookup() {
        let lookup = |name: &str| name == "java.lang.Comparable";
        assert_eq!(member("isInterface", "java.lang.Comparable", lookup).unwrap(), json!(true));
        assert_eq!(member("isInterface", "java.lang.String", lookup).unwrap(), json!(false));
    }

    #[test]
    fn underivable_members_are_unsupported() {
        assert!(member("getSuperclass", "java.lang.String", no_interfaces).is_none());
        assert!(member("getTypeParameters", "java.lang.String", no_interfaces).is_none());
    }

    #[test]
    fn missing_target_is_a_mechanism_fault() {
        let d = MethodDescriptor::nullary("java.lang.Class", "getName");
        assert!(dispatch(&d, None, no_interfaces).is_err());
    }
}

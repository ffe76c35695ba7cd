//! Invocation policy for the reflective bridge.
//!
//! Core principle: **no reflective call runs unless classification allows it.**

mod error;
mod policy;
mod rules;

pub use error::{Error, Result};
pub use policy::{Decision, InvocationPolicy};
pub use rules::RuleSet;

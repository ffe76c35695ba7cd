use crate::Fault;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The policy rejected the invocation before any dispatch occurred.
    /// The message is fixed; it must not say which rule fired.
    #[error("invocation not supported")]
    CapabilityDenied,

    /// The invoked member itself faulted; its fault surfaces verbatim.
    #[error("invocation fault: {0}")]
    Invocation(Fault),

    /// The privileged dispatch mechanism faulted around the member.
    #[error("privilege fault: {0}")]
    Privilege(Fault),
}

pub type Result<T> = std::result::Result<T, Error>;

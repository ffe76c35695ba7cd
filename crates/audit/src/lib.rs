//! SQLite-backed decision log for the invocation guard.
//!
//! Every outcome the guard produces — allowed, denied, faulted — can be
//! appended here as a timestamped event and queried back per bridge. The
//! log answers "why was that call rejected?" after the fact, without the
//! rejection itself leaking rule identity to the calling script.
//!
//! # Example
//!
//! ```no_run
//! use audit::{BridgeId, DecisionLog, Event, Outcome};
//!
//! let log = DecisionLog::open("decisions.db")?;
//! let bridge_id = BridgeId::new();
//!
//! log.append(&Event::new(bridge_id, Outcome::denied("java.lang.Runtime", "exec")))?;
//!
//! for event in log.load_bridge(bridge_id)? {
//!     println!("{}: {:?}", event.timestamp, event.outcome);
//! }
//! # Ok::<(), audit::Error>(())
//! ```

mod error;
mod event;
mod log;

pub use error::{Error, Result};
pub use event::{BridgeId, Event, Outcome};
pub use log::{BridgeSummary, DecisionLog};

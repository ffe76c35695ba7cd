//! SQLite decision log implementation.

use crate::{BridgeId, Event, Outcome, Result};
use rusqlite::{Connection, params};
use std::path::Path;

/// SQLite-backed decision log.
pub struct DecisionLog {
    conn: Connection,
}

/// Per-bridge roll-up of logged decisions.
#[derive(Debug, Clone)]
pub struct BridgeSummary {
    pub id: BridgeId,
    pub decisions: usize,
    pub denials: usize,
}

impl DecisionLog {
    /// Open or create a decision log at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let log = Self { conn };
        log.init_schema()?;
        Ok(log)
    }

    /// Create an in-memory decision log (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let log = Self { conn };
        log.init_schema()?;
        Ok(log)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS decisions (
                id TEXT PRIMARY KEY,
                bridge_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                outcome TEXT NOT NULL,
                data TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_decisions_bridge
                ON decisions(bridge_id, timestamp);
            "#,
        )?;
        Ok(())
    }

    /// Append a decision event to the log.
    pub fn append(&self, event: &Event) -> Result<()> {
        self.conn.execute(
            "INSERT INTO decisions (id, bridge_id, timestamp, outcome, data) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.id.to_string(),
                event.bridge_id.to_string(),
                event.timestamp.to_rfc3339(),
                outcome_name(&event.outcome),
                serde_json::to_string(&event.outcome)?,
            ],
        )?;
        Ok(())
    }

    /// Load all events for a bridge, ordered by timestamp.
    pub fn load_bridge(&self, bridge_id: BridgeId) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, bridge_id, timestamp, data FROM decisions
             WHERE bridge_id = ?1 ORDER BY timestamp",
        )?;

        let events = stmt
            .query_map([bridge_id.to_string()], |row| {
                let id: String = row.get(0)?;
                let bridge_id: String = row.get(1)?;
                let timestamp: String = row.get(2)?;
                let data: String = row.get(3)?;
                Ok((id, bridge_id, timestamp, data))
            })?
            .filter_map(|r| r.ok())
            .filter_map(|(id, bridge_id, timestamp, data)| {
                Some(Event {
                    id: id.parse().ok()?,
                    bridge_id: BridgeId(bridge_id.parse().ok()?),
                    timestamp: timestamp.parse().ok()?,
                    outcome: serde_json::from_str(&data).ok()?,
                })
            })
            .collect();

        Ok(events)
    }

    /// Summarize every bridge seen in the log.
    pub fn list_bridges(&self) -> Result<Vec<BridgeSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT bridge_id,
                    COUNT(*),
                    SUM(CASE WHEN outcome = 'denied' THEN 1 ELSE 0 END)
             FROM decisions GROUP BY bridge_id ORDER BY MIN(timestamp)",
        )?;

        let summaries = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let decisions: i64 = row.get(1)?;
                let denials: i64 = row.get(2)?;
                Ok((id, decisions, denials))
            })?
            .filter_map(|r| r.ok())
            .filter_map(|(id, decisions, denials)| {
                Some(BridgeSummary {
                    id: BridgeId(id.parse().ok()?),
                    decisions: decisions as usize,
                    denials: denials as usize,
                })
            })
            .collect();

        Ok(summaries)
    }
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Allowed { .. } => "allowed",
        Outcome::Denied { .. } => "denied",
        Outcome::Faulted { .. } => "faulted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_load_round_trip() {
        let log = DecisionLog::in_memory().unwrap();
        let bridge_id = BridgeId::new();

        log.append(&Event::new(bridge_id, Outcome::allowed("java.lang.String", "length")))
            .unwrap();
        log.append(&Event::new(bridge_id, Outcome::denied("java.lang.Runtime", "exec")))
            .unwrap();

        let events = log.load_bridge(bridge_id).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[1].outcome.is_denied());
    }

    #[test]
    fn load_is_scoped_to_the_bridge() {
        let log = DecisionLog::in_memory().unwrap();
        let a = BridgeId::new();
        let b = BridgeId::new();

        log.append(&Event::new(a, Outcome::denied("java.lang.System", "exit")))
            .unwrap();

        assert_eq!(log.load_bridge(a).unwrap().len(), 1);
        assert!(log.load_bridge(b).unwrap().is_empty());
    }

    #[test]
    fn summaries_count_denials() {
        let log = DecisionLog::in_memory().unwrap();
        let bridge_id = BridgeId::new();

        log.append(&Event::new(bridge_id, Outcome::allowed("com.example.Widget", "render")))
            .unwrap();
        log.append(&Event::new(bridge_id, Outcome::denied("java.lang.Runtime", "exec")))
            .unwrap();
        log.append(&Event::new(
            bridge_id,
            Outcome::faulted("com.example.Widget", "explode", "widget exploded"),
        ))
        .unwrap();

        let summaries = log.list_bridges().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].decisions, 3);
        assert_eq!(summaries[0].denials, 1);
    }
}

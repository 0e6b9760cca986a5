use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies the rule-instance channel an event is published on.
///
/// One rule instance owns exactly one target; everything it publishes over
/// its lifetime carries the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Envelope published to the dispatch sink on each activation transition.
///
/// Write-once per transition: the scheduler constructs a fresh event (new
/// `event_id`, current `timestamp`) every time the activation value changes,
/// and never re-publishes an unchanged value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Rule-instance channel this event belongs to.
    pub target: TargetId,

    /// The activation value being published.
    pub active: bool,

    /// When the transition was observed.
    pub timestamp: DateTime<Utc>,

    /// Unique id for this emission (tracing / dedup downstream).
    pub event_id: Uuid,
}

impl DispatchEvent {
    /// Create a new event stamped with the transition instant.
    pub fn new(target: TargetId, active: bool, at: DateTime<Utc>) -> Self {
        Self {
            target,
            active,
            timestamp: at,
            event_id: Uuid::new_v4(),
        }
    }
}

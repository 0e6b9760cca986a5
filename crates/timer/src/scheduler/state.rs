//! Last-published activation value with change detection.

use chrono::{DateTime, Utc};

/// The single activation value last published, plus when it changed.
///
/// Owned exclusively by the tick task; a fresh instance is created on every
/// `start`, so a restarted rule carries no memory of the prior run.
///
/// The unset state behaves as an implicit "inactive" baseline for emission
/// purposes: the first observed `true` is a transition and publishes, while
/// a run that only ever observes `false` publishes nothing at all.
#[derive(Debug, Default)]
pub struct ActivationState {
    last: Option<bool>,
    changed_at: Option<DateTime<Utc>>,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed value. Returns `true` when the observation is a
    /// transition the caller must publish.
    pub fn observe(&mut self, active: bool, at: DateTime<Utc>) -> bool {
        let changed = match self.last {
            None => active,
            Some(prev) => prev != active,
        };
        self.last = Some(active);
        if changed {
            self.changed_at = Some(at);
        }
        changed
    }

    /// The value most recently observed, if any tick has run.
    pub fn last_observed(&self) -> Option<bool> {
        self.last
    }

    /// When the published value last changed.
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.changed_at
    }
}

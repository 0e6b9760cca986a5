//! In-memory recording sink.
//!
//! An explicitly constructed per-run context object: every test (or embedded
//! harness) builds its own `MemoryDispatcher` and hands it to the scheduler,
//! so concurrent test runs never observe each other's values. Records the
//! full emission history plus the last value per target.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::DispatchError;
use crate::event::{DispatchEvent, TargetId};
use crate::sink::DispatchSink;

#[derive(Debug, Default)]
struct Store {
    history: Vec<DispatchEvent>,
    last: HashMap<TargetId, bool>,
}

/// Recording [`DispatchSink`] backed by an in-process store.
#[derive(Debug, Default)]
pub struct MemoryDispatcher {
    store: Mutex<Store>,
}

impl MemoryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far, in publish order.
    pub async fn history(&self) -> Vec<DispatchEvent> {
        self.store.lock().await.history.clone()
    }

    /// Number of events published so far.
    pub async fn len(&self) -> usize {
        self.store.lock().await.history.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.history.is_empty()
    }

    /// Last published value for a target, if any.
    pub async fn last_value(&self, target: &TargetId) -> Option<bool> {
        self.store.lock().await.last.get(target).copied()
    }

    /// Last published values across all targets.
    pub async fn values(&self) -> HashMap<TargetId, bool> {
        self.store.lock().await.last.clone()
    }

    /// Drop all recorded events and values.
    pub async fn clear(&self) {
        let mut store = self.store.lock().await;
        store.history.clear();
        store.last.clear();
    }
}

#[async_trait]
impl DispatchSink for MemoryDispatcher {
    async fn publish(&self, event: DispatchEvent) -> Result<(), DispatchError> {
        let mut store = self.store.lock().await;
        store.last.insert(event.target.clone(), event.active);
        store.history.push(event);
        Ok(())
    }
}

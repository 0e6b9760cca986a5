use async_trait::async_trait;
use tracing::info;

use crate::error::DispatchError;
use crate::event::DispatchEvent;
use crate::sink::DispatchSink;

/// Sink that logs each transition as a structured tracing event.
///
/// Used by the worker binary when no downstream bus is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDispatcher;

#[async_trait]
impl DispatchSink for TracingDispatcher {
    async fn publish(&self, event: DispatchEvent) -> Result<(), DispatchError> {
        info!(
            target_id = %event.target,
            active = event.active,
            event_id = %event.event_id,
            "activation transition"
        );
        Ok(())
    }
}

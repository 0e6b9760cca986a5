use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DispatchError;
use crate::event::DispatchEvent;

/// Publishes activation events to the downstream value bus.
///
/// Publish-only from the rule's perspective: delivery guarantees are owned
/// by the sink, and duplicate delivery of the same event is tolerable
/// downstream. The scheduler itself only calls this on a state transition.
#[async_trait]
pub trait DispatchSink: Send + Sync {
    /// Publish one event. Must not block on downstream consumers.
    async fn publish(&self, event: DispatchEvent) -> Result<(), DispatchError>;
}

/// Blanket implementation so `Arc<dyn DispatchSink>` can be used directly.
#[async_trait]
impl<T: DispatchSink + ?Sized> DispatchSink for Arc<T> {
    async fn publish(&self, event: DispatchEvent) -> Result<(), DispatchError> {
        (**self).publish(event).await
    }
}

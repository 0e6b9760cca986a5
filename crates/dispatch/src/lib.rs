//! Value-dispatch seam between rule evaluation and the rest of the engine.
//!
//! This crate provides:
//! - [`DispatchEvent`]: the typed envelope a rule publishes on a state change
//! - [`DispatchSink`]: the publish-only trait the scheduler writes to
//! - [`MemoryDispatcher`]: an explicitly constructed per-run recording sink
//! - [`TracingDispatcher`]: a sink that logs transitions, used by the worker

pub mod error;
pub mod event;
pub mod log;
pub mod memory;
pub mod sink;

pub use error::DispatchError;
pub use event::{DispatchEvent, TargetId};
pub use log::TracingDispatcher;
pub use memory::MemoryDispatcher;
pub use sink::DispatchSink;

//! Periodic activation scheduling for one rule instance.
//!
//! [`TimerRule`] drives re-evaluation on a fixed tick, tracks the previously
//! published activation value, and publishes exactly one dispatch event per
//! state transition. Tick state lives inside a single cooperative tokio
//! task, so reads and writes of the activation value are serialized by
//! construction.

mod core;
mod state;


pub use self::core::{TimerRule, WindowDiagnostic};
pub use self::state::ActivationState;

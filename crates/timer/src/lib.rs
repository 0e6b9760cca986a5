//! Calendar-timer activation rule.
//!
//! This crate provides:
//! - RFC-2445-style recurrence parsing narrowed to daily weekday inclusion
//! - Activation windows built from calendar configuration entries
//! - The OR-combinator over all configured windows
//! - The tick scheduler that samples the clock and publishes de-duplicated
//!   activation transitions to a dispatch sink

pub mod error;
pub mod evaluator;
pub mod recurrence;
pub mod schema;
pub mod scheduler;
pub mod window;

pub use error::TimerError;
pub use evaluator::any_active;
pub use recurrence::RecurrenceRule;
pub use scheduler::TimerRule;
pub use window::{build_windows, Window};

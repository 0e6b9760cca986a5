use thiserror::Error;

use zeitwerk_core::ClockError;
use zeitwerk_dispatch::DispatchError;

/// Errors that can occur in the timer rule.
///
/// None of these escalate to process termination: malformed configuration
/// degrades the affected window to permanently inactive, a clock failure
/// invalidates a single tick, and dispatch failures are logged and retried
/// on the next transition. The policy throughout is fail-to-inactive.
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("invalid recurrence expression: {0}")]
    InvalidRecurrenceExpression(String),

    #[error("invalid window bounds: {0}")]
    InvalidWindowBounds(String),

    #[error(transparent)]
    ClockUnavailable(#[from] ClockError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("calendar config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("calendar config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

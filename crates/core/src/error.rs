use thiserror::Error;

/// Failure to read the current instant from a clock source.
///
/// Fatal to a single evaluation tick only: the scheduler skips the tick
/// and retries on the next one, publishing nothing in between.
#[derive(Debug, Clone, Error)]
#[error("clock unavailable: {0}")]
pub struct ClockError(pub String);

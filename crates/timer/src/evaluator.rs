//! Activation evaluation: logical OR over all configured windows.

use chrono::{DateTime, Utc};

use crate::window::Window;

/// Whether any window is active at `now`.
///
/// Empty list is inactive. Evaluation short-circuits on the first active
/// window; since each window's predicate is pure this has no observable
/// effect beyond saved work, and the result is order-independent.
pub fn any_active(windows: &[Window], now: DateTime<Utc>) -> bool {
    windows.iter().any(|w| w.is_active(now))
}

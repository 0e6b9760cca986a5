use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Engine config ─────────────────────────────────────────────

/// Runtime knobs for the timer engine, read from the environment.
///
/// The tick interval is a scheduling parameter, not data: it bounds how
/// quickly a window transition is observed, independent of the configured
/// windows themselves. Reference scenarios use sub-3-second windows, so the
/// default samples well under one second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluation tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// Path to the YAML calendar configuration file.
    pub calendar_path: PathBuf,
}

impl EngineConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            tick_interval_ms: env_u64("ZEITWERK_TICK_INTERVAL_MS", 250),
            calendar_path: PathBuf::from(env_or("ZEITWERK_CALENDAR_PATH", "config/calendar.yaml")),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  tick_interval: {}ms", self.tick_interval_ms);
        tracing::info!("  calendar:      {}", self.calendar_path.display());
    }

    /// Return a view safe for diagnostics endpoints.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "tick_interval_ms": self.tick_interval_ms,
            "calendar_path": self.calendar_path,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            calendar_path: PathBuf::from("config/calendar.yaml"),
        }
    }
}

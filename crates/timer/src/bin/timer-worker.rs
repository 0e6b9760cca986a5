//! timer-worker — runs one calendar-timer rule instance against a sink.
//!
//! Loads a YAML calendar document, builds the activation windows, and drives
//! the tick scheduler until SIGINT. Transitions are published to a tracing
//! sink; embedding the rule in a larger engine means swapping in a real
//! dispatch sink instead.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zeitwerk_core::{config::load_dotenv, Clock, EngineConfig, SystemClock};
use zeitwerk_dispatch::{DispatchSink, TargetId, TracingDispatcher};
use zeitwerk_timer::schema::load_calendar_file;
use zeitwerk_timer::{build_windows, TimerRule};

// ── CLI ─────────────────────────────────────────────────────────────

/// Calendar-timer worker — evaluates activation windows on a periodic tick.
#[derive(Parser, Debug)]
#[command(name = "timer-worker", version, about)]
struct Cli {
    /// Path to the YAML calendar configuration file.
    #[arg(long, env = "ZEITWERK_CALENDAR_PATH", default_value = "config/calendar.yaml")]
    calendar: PathBuf,

    /// Rule-instance channel transitions are published on.
    #[arg(long, env = "ZEITWERK_TARGET_ID", default_value = "timer-rule")]
    target: String,

    /// Evaluation tick interval in milliseconds.
    #[arg(long, env = "ZEITWERK_TICK_INTERVAL_MS", default_value_t = 250)]
    tick_interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = EngineConfig {
        tick_interval_ms: cli.tick_interval_ms,
        calendar_path: cli.calendar,
    };
    config.log_summary();

    let calendar = load_calendar_file(&config.calendar_path)
        .with_context(|| format!("loading calendar file {}", config.calendar_path.display()))?;
    let windows = build_windows(&calendar);
    info!(windows = windows.len(), "calendar loaded");

    let rule = TimerRule::new(
        TargetId::new(cli.target),
        Arc::new(SystemClock) as Arc<dyn Clock>,
        Arc::new(TracingDispatcher) as Arc<dyn DispatchSink>,
        config.tick_interval(),
    );

    rule.start(windows).await;
    for diagnostic in rule.diagnostics().await {
        warn!(
            window = %diagnostic.window_id,
            reason = %diagnostic.reason,
            "window is permanently inactive for this run"
        );
    }

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutdown signal received");

    rule.stop().await;
    info!("timer-worker shutdown complete");
    Ok(())
}

//! [`TimerRule`] — the tick scheduler and its start/stop lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use zeitwerk_core::Clock;
use zeitwerk_dispatch::{DispatchEvent, DispatchSink, TargetId};

use crate::evaluator::any_active;
use crate::window::Window;

use super::state::ActivationState;

/// A degraded window surfaced for operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDiagnostic {
    pub window_id: String,
    pub reason: String,
}

struct Run {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
    diagnostics: Vec<WindowDiagnostic>,
}

/// One timer rule instance: `Stopped` until [`start`](TimerRule::start),
/// then a single cooperative tick task until [`stop`](TimerRule::stop).
///
/// Windows are supplied at start and immutable for the run; changing
/// configuration means `stop` followed by `start` with a new list.
pub struct TimerRule {
    target: TargetId,
    tick_interval: Duration,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn DispatchSink>,
    run: Mutex<Option<Run>>,
}

impl TimerRule {
    pub fn new(
        target: TargetId,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn DispatchSink>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            target,
            tick_interval,
            clock,
            sink,
            run: Mutex::new(None),
        }
    }

    /// Transition `Stopped` → `Running` with the given windows.
    ///
    /// The last-published value starts unset, so the first run of ticks
    /// reflects current conditions rather than stale memory. Starting an
    /// already-running rule is a no-op (stop first to reconfigure).
    pub async fn start(&self, windows: Vec<Window>) {
        let mut run = self.run.lock().await;
        if run.is_some() {
            warn!(target_id = %self.target, "start ignored: rule already running");
            return;
        }

        let diagnostics: Vec<WindowDiagnostic> = windows
            .iter()
            .filter_map(|w| {
                w.degrade_reason().map(|reason| WindowDiagnostic {
                    window_id: w.id().to_string(),
                    reason: reason.to_string(),
                })
            })
            .collect();

        info!(
            target_id = %self.target,
            windows = windows.len(),
            degraded = diagnostics.len(),
            tick_interval = ?self.tick_interval,
            "timer rule starting"
        );

        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(tick_loop(
            self.target.clone(),
            Arc::clone(&self.clock),
            Arc::clone(&self.sink),
            windows,
            self.tick_interval,
            Arc::clone(&shutdown),
        ));

        *run = Some(Run {
            shutdown,
            task,
            diagnostics,
        });
    }

    /// Transition `Running` → `Stopped`.
    ///
    /// Cooperative: an in-flight tick finishes before the task exits, and no
    /// final "deactivated" event is emitted — shutting down is not an
    /// observed activation change. Stopping a stopped rule is a no-op.
    pub async fn stop(&self) {
        let run = self.run.lock().await.take();
        let Some(run) = run else {
            debug!(target_id = %self.target, "stop ignored: rule not running");
            return;
        };

        run.shutdown.notify_one();
        if let Err(e) = run.task.await {
            warn!(target_id = %self.target, error = %e, "tick task join failed");
        }
        info!(target_id = %self.target, "timer rule stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.run.lock().await.is_some()
    }

    /// Degraded windows of the current run (empty when stopped or clean).
    pub async fn diagnostics(&self) -> Vec<WindowDiagnostic> {
        self.run
            .lock()
            .await
            .as_ref()
            .map(|r| r.diagnostics.clone())
            .unwrap_or_default()
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }
}

/// The tick loop: sample the clock, evaluate all windows, publish on change.
///
/// Ticks never overlap: one tick executes to completion (including the
/// publish await) before the next interval fire is considered, and a
/// shutdown requested mid-tick takes effect only between ticks.
async fn tick_loop(
    target: TargetId,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn DispatchSink>,
    windows: Vec<Window>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut state = ActivationState::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = match clock.now() {
                    Ok(now) => now,
                    Err(e) => {
                        // Fatal to this tick only; retry on the next one.
                        warn!(target_id = %target, error = %e, "clock unavailable, skipping tick");
                        continue;
                    }
                };

                let active = any_active(&windows, now);
                if state.observe(active, now) {
                    debug!(target_id = %target, active, "activation transition");
                    let event = DispatchEvent::new(target.clone(), active, now);
                    if let Err(e) = sink.publish(event).await {
                        warn!(target_id = %target, error = %e, "failed to publish transition");
                    }
                }
            }
            _ = shutdown.notified() => {
                debug!(target_id = %target, "tick loop shutting down");
                break;
            }
        }
    }
}

//! # Bulk Executor
//!
//! The lifecycle owner for a bulk run: partitions the selected items into
//! contiguous batches, fans the external per-item operation out across each
//! batch, records every outcome with per-item error isolation, and exposes
//! pause/resume/cancel controls alongside a broadcast progress feed.
//!
//! ## Execution model
//!
//! Batches run strictly in order; items *within* a batch are dispatched
//! concurrently and awaited together, so the batch boundary is the sole
//! checkpoint where pause and cancel take effect. A paused run parks at
//! that boundary and continues from the current index on resume; a
//! cancelled run stops there after the in-flight batch drains, with the
//! drained batch's results still recorded.
//!
//! One run is live per executor at a time. The executor is cheap to clone
//! (clones share the same run) so control calls can come from a different
//! task than the one driving `execute`.

use super::errors::{OrchestrationError, OrchestrationResult};
use super::run_state::RunState;
use super::types::{ApplyAction, OperationItem, ProgressSnapshot, RunSummary};
use crate::config::BulkOpsConfig;
use crate::events::ProgressPublisher;
use crate::request::ExecutionRequest;
use crate::state_machine::{determine_target_state, RunEvent, RunStatus};
use chrono::Utc;
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::Notify;
use tracing::{debug, info, instrument, warn};

/// Whether the dispatch loop may start the next batch
enum DispatchDecision {
    Proceed,
    Stop,
}

/// Result of one finalization attempt at the end of dispatch
enum FinishOutcome {
    Done(Option<ProgressSnapshot>),
    Park,
}

/// Bulk execution orchestrator. See the module docs for the execution model.
#[derive(Clone)]
pub struct BulkExecutor {
    config: BulkOpsConfig,
    publisher: ProgressPublisher,
    // Never held across an await; all mutation happens at item resolution
    // or batch boundaries
    state: Arc<Mutex<RunState>>,
    resume_notify: Arc<Notify>,
}

impl BulkExecutor {
    pub fn new() -> Self {
        Self::with_config(BulkOpsConfig::default())
    }

    pub fn with_config(config: BulkOpsConfig) -> Self {
        let publisher = ProgressPublisher::new(config.event_channel_capacity);
        Self {
            config,
            publisher,
            state: Arc::new(Mutex::new(RunState::idle())),
            resume_notify: Arc::new(Notify::new()),
        }
    }

    pub fn config(&self) -> &BulkOpsConfig {
        &self.config
    }

    /// Subscribe to the progress snapshot feed
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressSnapshot> {
        self.publisher.subscribe()
    }

    pub fn status(&self) -> RunStatus {
        self.state.lock().status
    }

    /// Pull-based view of the current run, for observers that do not
    /// subscribe to the feed
    pub fn snapshot(&self) -> ProgressSnapshot {
        let state = self.state.lock();
        let message = progress_message(&state);
        state.snapshot(message)
    }

    /// Start a run. Rejected while a run is live or terminal-but-unreset.
    ///
    /// Resolves to the final [`RunSummary`] once the run reaches a terminal
    /// status; progress along the way arrives on the snapshot feed.
    #[instrument(skip(self, request, apply), fields(
        action = %request.action.id,
        total = request.items.len(),
        batch_size = request.batch_size,
        dry_run = request.dry_run,
    ))]
    pub async fn execute(
        &self,
        request: ExecutionRequest,
        apply: Arc<dyn ApplyAction>,
    ) -> OrchestrationResult<RunSummary> {
        let total = request.items.len();

        let start_snapshot = {
            let mut state = self.state.lock();
            let next = determine_target_state(state.status, &RunEvent::Execute)?;
            let mut fresh = RunState::start(total);
            fresh.status = next;
            *state = fresh;
            state.snapshot(format!(
                "Starting '{}' for {total} items",
                request.action.label
            ))
        };
        info!(run_id = %start_snapshot.run_id, "Bulk run started");
        self.publisher.publish(start_snapshot);

        // The builder clamps already; this guards directly-constructed requests
        let batch_size = request.batch_size.max(1);

        for batch in request.items.chunks(batch_size) {
            match self.wait_for_dispatch().await? {
                DispatchDecision::Proceed => {}
                DispatchDecision::Stop => break,
            }
            debug!(batch_len = batch.len(), "Dispatching batch");
            self.run_batch(batch, &request, &apply).await;
        }

        // A pause during the final batch leaves every item resolved but the
        // run suspended; finishing still waits for resume or cancel. Status
        // is re-checked under the lock so a control call landing between the
        // boundary check and the Finish transition cannot race it.
        loop {
            let outcome = {
                let mut state = self.state.lock();
                match state.status {
                    RunStatus::Running => {
                        let failures = state.failed.len();
                        let next =
                            determine_target_state(state.status, &RunEvent::Finish { failures })?;
                        state.status = next;
                        state.finished_at = Some(Utc::now());
                        let message = match next {
                            RunStatus::Completed => format!("Completed {} items", state.total),
                            _ => failure_summary(failures),
                        };
                        FinishOutcome::Done(Some(state.snapshot(message)))
                    }
                    RunStatus::Cancelled => {
                        state.finished_at = Some(Utc::now());
                        FinishOutcome::Done(None)
                    }
                    RunStatus::Paused => FinishOutcome::Park,
                    other => {
                        return Err(OrchestrationError::Internal(format!(
                            "run left in unexpected state '{other}' at finalization"
                        )))
                    }
                }
            };
            match outcome {
                FinishOutcome::Done(snapshot) => {
                    if let Some(snapshot) = snapshot {
                        self.publisher.publish(snapshot);
                    }
                    break;
                }
                FinishOutcome::Park => self.resume_notify.notified().await,
            }
        }

        let summary = self.state.lock().summary();
        info!(
            run_id = %summary.run_id,
            status = %summary.status,
            completed = summary.completed_count,
            failed = summary.failed_count,
            "Bulk run finished"
        );
        Ok(summary)
    }

    /// Suspend dispatch after the in-flight batch drains. Idempotent while
    /// paused; invalid in any other non-running state.
    pub fn pause(&self) -> OrchestrationResult<()> {
        let snapshot = {
            let mut state = self.state.lock();
            let next = determine_target_state(state.status, &RunEvent::Pause)?;
            if next == state.status {
                return Ok(());
            }
            state.status = next;
            state.snapshot("Run paused")
        };
        debug!(run_id = %snapshot.run_id, "Run paused");
        self.publisher.publish(snapshot);
        Ok(())
    }

    /// Resume dispatch from the current index. Idempotent while running.
    pub fn resume(&self) -> OrchestrationResult<()> {
        let snapshot = {
            let mut state = self.state.lock();
            let next = determine_target_state(state.status, &RunEvent::Resume)?;
            if next == state.status {
                return Ok(());
            }
            state.status = next;
            state.snapshot("Run resumed")
        };
        debug!(run_id = %snapshot.run_id, "Run resumed");
        self.publisher.publish(snapshot);
        self.resume_notify.notify_one();
        Ok(())
    }

    /// Stop the run. The in-flight batch, if any, drains and its results
    /// are recorded; no further batches are dispatched.
    pub fn cancel(&self) -> OrchestrationResult<()> {
        let snapshot = {
            let mut state = self.state.lock();
            let next = determine_target_state(state.status, &RunEvent::Cancel)?;
            state.status = next;
            state.snapshot("Run cancelled")
        };
        info!(run_id = %snapshot.run_id, current = snapshot.current, "Run cancelled");
        self.publisher.publish(snapshot);
        // Wake a parked run so it observes the cancellation
        self.resume_notify.notify_one();
        Ok(())
    }

    /// Return a terminal executor to idle so a fresh `execute` is accepted
    pub fn reset(&self) -> OrchestrationResult<()> {
        let mut state = self.state.lock();
        determine_target_state(state.status, &RunEvent::Reset)?;
        *state = RunState::idle();
        Ok(())
    }

    /// Fan the per-item operation out across one batch and await all of it.
    /// Item failures are recorded, never propagated.
    async fn run_batch(
        &self,
        batch: &[Arc<dyn OperationItem>],
        request: &ExecutionRequest,
        apply: &Arc<dyn ApplyAction>,
    ) {
        let futures = batch.iter().map(|item| {
            let item = item.clone();
            let apply = apply.clone();
            async move {
                let outcome = apply
                    .apply(
                        &request.action,
                        item.as_ref(),
                        &request.parameters,
                        request.dry_run,
                    )
                    .await;

                let snapshot = {
                    let mut state = self.state.lock();
                    match outcome {
                        Ok(()) => state.record_success(item.id()),
                        Err(failure) => {
                            warn!(item_id = %item.id(), error = %failure, "Item operation failed");
                            state.record_failure(item.id(), item.label(), failure.to_string());
                        }
                    }
                    // Results from a draining batch are still recorded after
                    // a cancel, but the feed goes quiet once the run is
                    // terminal
                    if state.status.is_terminal() {
                        None
                    } else {
                        Some(state.snapshot(format!(
                            "Processed {} of {} items",
                            state.current_index, state.total
                        )))
                    }
                };
                if let Some(snapshot) = snapshot {
                    self.publisher.publish(snapshot);
                }
            }
        });

        join_all(futures).await;
    }

    /// Park at the batch boundary until the run may proceed or must stop
    async fn wait_for_dispatch(&self) -> OrchestrationResult<DispatchDecision> {
        loop {
            let status = self.state.lock().status;
            match status {
                RunStatus::Running => return Ok(DispatchDecision::Proceed),
                RunStatus::Cancelled => return Ok(DispatchDecision::Stop),
                RunStatus::Paused => {
                    debug!("Dispatch parked; waiting for resume or cancel");
                    self.resume_notify.notified().await;
                }
                other => {
                    return Err(OrchestrationError::Internal(format!(
                        "run left in unexpected state '{other}' during dispatch"
                    )))
                }
            }
        }
    }
}

impl Default for BulkExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_summary(failures: usize) -> String {
    if failures == 1 {
        "Completed with 1 error".to_string()
    } else {
        format!("Completed with {failures} errors")
    }
}

fn progress_message(state: &RunState) -> String {
    match state.status {
        RunStatus::Idle => "Idle".to_string(),
        RunStatus::Running => format!(
            "Processed {} of {} items",
            state.current_index, state.total
        ),
        RunStatus::Paused => format!("Paused at {} of {} items", state.current_index, state.total),
        RunStatus::Completed => format!("Completed {} items", state.total),
        RunStatus::Error => failure_summary(state.failed.len()),
        RunStatus::Cancelled => format!(
            "Cancelled after {} of {} items",
            state.current_index, state.total
        ),
    }
}

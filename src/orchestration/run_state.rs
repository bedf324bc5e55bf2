//! Mutable session state for a single run. Exactly one `RunState` is live
//! per executor; it is replaced wholesale when a new run begins.

use super::types::{ItemError, ProgressSnapshot, RunSummary};
use crate::state_machine::RunStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Invariants, held at every snapshot:
/// `completed.len() + failed.len() == current_index <= total` and
/// `errors.len() == failed.len()`.
#[derive(Debug, Clone)]
pub struct RunState {
    pub run_id: Uuid,
    pub status: RunStatus,
    /// Count of items resolved so far
    pub current_index: usize,
    /// Item count, fixed at run start
    pub total: usize,
    /// Ids of items that succeeded, in resolution order
    pub completed: Vec<String>,
    /// Ids of items that failed, in resolution order
    pub failed: Vec<String>,
    /// One entry per failed item, in resolution order
    pub errors: Vec<ItemError>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunState {
    /// Fresh idle state, before any run has been requested.
    pub fn idle() -> Self {
        Self::start(0)
    }

    /// State for a run over `total` items. Status starts at `Idle`; the
    /// executor applies the `Execute` transition itself.
    pub fn start(total: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            status: RunStatus::Idle,
            current_index: 0,
            total,
            completed: Vec::with_capacity(total),
            failed: Vec::new(),
            errors: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record_success(&mut self, item_id: String) {
        self.completed.push(item_id);
        self.current_index += 1;
    }

    pub fn record_failure(&mut self, item_id: String, label: String, message: String) {
        self.errors.push(ItemError {
            item_id: item_id.clone(),
            label,
            message,
        });
        self.failed.push(item_id);
        self.current_index += 1;
    }

    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.current_index as f64 / self.total as f64) * 100.0).round() as u8
    }

    pub fn remaining(&self) -> usize {
        self.total - self.current_index
    }

    pub fn snapshot(&self, message: impl Into<String>) -> ProgressSnapshot {
        ProgressSnapshot {
            run_id: self.run_id,
            status: self.status,
            current: self.current_index,
            total: self.total,
            message: message.into(),
            percentage: self.percentage(),
            completed: self.completed.clone(),
            failed: self.failed.clone(),
            errors: self.errors.clone(),
            captured_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            run_id: self.run_id,
            status: self.status,
            total: self.total,
            completed_count: self.completed.len(),
            failed_count: self.failed.len(),
            errors: self.errors.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at,
            duration_ms: self
                .finished_at
                .map(|end| (end - self.started_at).num_milliseconds().max(0) as u64),
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_maintains_invariant() {
        let mut state = RunState::start(3);
        state.record_success("a".into());
        state.record_failure("b".into(), "Item B".into(), "boom".into());

        assert_eq!(state.current_index, 2);
        assert_eq!(state.completed.len() + state.failed.len(), state.current_index);
        assert_eq!(state.errors.len(), state.failed.len());
        assert_eq!(state.errors[0].item_id, "b");
    }

    #[test]
    fn test_percentage_rounding() {
        let mut state = RunState::start(3);
        state.record_success("a".into());
        assert_eq!(state.percentage(), 33);
        state.record_success("b".into());
        assert_eq!(state.percentage(), 67);
        state.record_success("c".into());
        assert_eq!(state.percentage(), 100);
    }

    #[test]
    fn test_zero_total_is_always_complete() {
        let state = RunState::start(0);
        assert_eq!(state.percentage(), 100);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_summary_duration() {
        let mut state = RunState::start(1);
        state.record_success("a".into());
        state.finished_at = Some(state.started_at + chrono::Duration::milliseconds(250));
        let summary = state.summary();
        assert_eq!(summary.duration_ms, Some(250));
        assert_eq!(summary.completed_count, 1);
    }
}

//! # Progress/Result Presenter
//!
//! Pure rendering of a progress snapshot into a displayable report. No
//! decisions, no side effects, no access to live run state — callers feed
//! it snapshots from the progress feed or from `BulkExecutor::snapshot()`.

use crate::orchestration::types::ProgressSnapshot;
use crate::state_machine::RunStatus;
use serde::{Deserialize, Serialize};

/// Renderable summary of a run, derived entirely from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status_line: String,
    pub completed: usize,
    pub failed: usize,
    pub remaining: usize,
    pub percentage: u8,
    /// `"<label>: <message>"` per failed item, in completion order
    pub error_lines: Vec<String>,
}

/// Render a snapshot. The three terminal outcomes stay distinguishable:
/// a clean completion, a completion with failures, and a user cancellation
/// each get their own status line.
pub fn render_report(snapshot: &ProgressSnapshot) -> RunReport {
    let completed = snapshot.completed.len();
    let failed = snapshot.failed.len();
    let remaining = snapshot.total.saturating_sub(snapshot.current);

    let status_line = match snapshot.status {
        RunStatus::Idle => "Idle".to_string(),
        RunStatus::Running => format!(
            "Processing {} of {} items",
            snapshot.current, snapshot.total
        ),
        RunStatus::Paused => format!("Paused at {} of {} items", snapshot.current, snapshot.total),
        RunStatus::Completed => format!("Completed cleanly: {} items processed", snapshot.total),
        RunStatus::Error => match failed {
            1 => "Completed with 1 error".to_string(),
            n => format!("Completed with {n} errors"),
        },
        RunStatus::Cancelled => format!(
            "Cancelled by user: {} of {} items processed",
            snapshot.current, snapshot.total
        ),
    };

    let error_lines = snapshot
        .errors
        .iter()
        .map(|e| format!("{}: {}", e.label, e.message))
        .collect();

    RunReport {
        status_line,
        completed,
        failed,
        remaining,
        percentage: snapshot.percentage,
        error_lines,
    }
}

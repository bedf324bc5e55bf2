//! # Orchestration Types
//!
//! Value types and boundary traits shared across the bulk execution engine:
//! progress snapshots, run summaries, per-item error records, and the
//! delegation seams the host application plugs into.

use crate::catalog::BulkAction;
use crate::state_machine::RunStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// An item the engine can operate on. The engine never inspects item shape
/// beyond these accessors; they exist for display and dedup only.
pub trait OperationItem: Send + Sync {
    fn id(&self) -> String;
    fn label(&self) -> String;
}

/// Failure raised by the per-item operation. Isolated per item; never
/// aborts the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemFailure {
    #[error("{0}")]
    Operation(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ItemFailure {
    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// The external per-item operation the engine delegates to.
///
/// Implementations signal item failure by returning `Err`; a normal return
/// records success. When `dry_run` is true the implementation must perform
/// validation/preview only and must not mutate any external state — the
/// engine passes the flag through unchanged and relies on this contract.
#[async_trait]
pub trait ApplyAction: Send + Sync {
    async fn apply(
        &self,
        action: &BulkAction,
        item: &dyn OperationItem,
        parameters: &HashMap<String, Value>,
        dry_run: bool,
    ) -> Result<(), ItemFailure>;
}

/// One recorded per-item error, in resolution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemError {
    pub item_id: String,
    pub label: String,
    pub message: String,
}

/// Point-in-time view of a run, emitted after every item resolution and
/// every status transition.
///
/// `completed`, `failed` and `errors` are in resolution order, not input
/// order: items within a batch are dispatched concurrently and may race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub run_id: Uuid,
    pub status: RunStatus,
    pub current: usize,
    pub total: usize,
    pub message: String,
    /// `round(100 * current / total)`; a zero-item run is 100 immediately
    pub percentage: u8,
    pub completed: Vec<String>,
    pub failed: Vec<String>,
    pub errors: Vec<ItemError>,
    pub captured_at: DateTime<Utc>,
}

/// Final outcome of a run, resolved by `execute()`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub status: RunStatus,
    pub total: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub errors: Vec<ItemError>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_failure_display() {
        assert_eq!(
            ItemFailure::operation("record locked").to_string(),
            "record locked"
        );
        assert_eq!(
            ItemFailure::validation("missing sku").to_string(),
            "Validation failed: missing sku"
        );
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = ProgressSnapshot {
            run_id: Uuid::new_v4(),
            status: RunStatus::Running,
            current: 3,
            total: 10,
            message: "Processed 3 of 10 items".to_string(),
            percentage: 30,
            completed: vec!["a".into(), "b".into()],
            failed: vec!["c".into()],
            errors: vec![ItemError {
                item_id: "c".into(),
                label: "Item C".into(),
                message: "boom".into(),
            }],
            captured_at: Utc::now(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: ProgressSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.current, 3);
        assert_eq!(parsed.status, RunStatus::Running);
        assert_eq!(parsed.errors.len(), 1);
    }
}

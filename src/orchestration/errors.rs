//! Structured error types for the execution engine.
//!
//! Lifecycle misuse surfaces here, synchronously; per-item failures never
//! do — they are recorded in the run's error list instead.

use crate::error::BulkOpsError;
use crate::state_machine::StateMachineError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrchestrationError {
    #[error(transparent)]
    InvalidTransition(#[from] StateMachineError),

    #[error("Internal orchestration error: {0}")]
    Internal(String),
}

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;

impl From<OrchestrationError> for BulkOpsError {
    fn from(err: OrchestrationError) -> Self {
        match err {
            OrchestrationError::InvalidTransition(inner) => {
                BulkOpsError::StateTransitionError(inner.to_string())
            }
            OrchestrationError::Internal(msg) => BulkOpsError::OrchestrationError(msg),
        }
    }
}

//! # Run State Machine
//!
//! Lifecycle transitions for a bulk execution run:
//!
//! ```text
//! idle --execute--> running
//! running --pause--> paused
//! paused --resume--> running
//! running --finish(0 failures)--> completed
//! running --finish(>=1 failure)--> error
//! running|paused --cancel--> cancelled
//! terminal --reset--> idle
//! ```
//!
//! `completed`, `error` and `cancelled` are terminal; a reset is required
//! before another run is accepted. Repeated `pause` while paused and
//! repeated `resume` while running are deliberate no-ops; every other
//! out-of-place event is an invalid transition reported synchronously.

pub mod events;
pub mod states;

pub use events::RunEvent;
pub use states::RunStatus;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateMachineError {
    #[error("Invalid transition: event '{event}' not allowed from state '{from}'")]
    InvalidTransition { from: RunStatus, event: &'static str },
}

pub type StateMachineResult<T> = Result<T, StateMachineError>;

/// Determine the target state for an event, or fail on an illegal transition.
pub fn determine_target_state(
    current: RunStatus,
    event: &RunEvent,
) -> StateMachineResult<RunStatus> {
    let target = match (current, event) {
        (RunStatus::Idle, RunEvent::Execute) => RunStatus::Running,

        (RunStatus::Running, RunEvent::Pause) => RunStatus::Paused,
        // Idempotent re-pause
        (RunStatus::Paused, RunEvent::Pause) => RunStatus::Paused,

        (RunStatus::Paused, RunEvent::Resume) => RunStatus::Running,
        // Idempotent re-resume
        (RunStatus::Running, RunEvent::Resume) => RunStatus::Running,

        (RunStatus::Running, RunEvent::Cancel) | (RunStatus::Paused, RunEvent::Cancel) => {
            RunStatus::Cancelled
        }

        (RunStatus::Running, RunEvent::Finish { failures: 0 }) => RunStatus::Completed,
        (RunStatus::Running, RunEvent::Finish { .. }) => RunStatus::Error,

        (from, RunEvent::Reset) if from.is_terminal() => RunStatus::Idle,

        (from, event) => {
            return Err(StateMachineError::InvalidTransition {
                from,
                event: event.event_type(),
            })
        }
    };

    Ok(target)
}

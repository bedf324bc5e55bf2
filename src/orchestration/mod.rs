//! # Orchestration Engine
//!
//! Core of the bulk-operation engine: the executor that drives a run
//! through its lifecycle, the mutable run state it maintains, and the
//! value types and boundary traits the host application integrates with.
//!
//! ## Core Components
//!
//! - **BulkExecutor**: lifecycle owner — batched dispatch, pause/resume/
//!   cancel, progress publication
//! - **RunState**: one live mutable record per executor, tracking counts
//!   and per-item outcomes
//! - **ApplyAction / OperationItem**: delegation seams supplied by the
//!   caller; the engine drives *some* asynchronous per-item operation to
//!   completion without knowing what it does

pub mod errors;
pub mod executor;
pub mod run_state;
pub mod types;

pub use errors::{OrchestrationError, OrchestrationResult};
pub use executor::BulkExecutor;
pub use run_state::RunState;
pub use types::{
    ApplyAction, ItemError, ItemFailure, OperationItem, ProgressSnapshot, RunSummary,
};

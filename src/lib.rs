#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Bulkops Core
//!
//! Client-side execution engine for bulk operations over a selected item
//! set: batched dispatch, live progress reporting, per-item error
//! isolation, and pause/resume/cancel lifecycle controls.
//!
//! ## Overview
//!
//! The engine takes a [`catalog::BulkAction`], an ordered set of opaque
//! items, and operational parameters (batch size, dry-run flag) assembled
//! into an [`request::ExecutionRequest`], and drives an external per-item
//! operation ([`orchestration::ApplyAction`]) to completion. A single
//! item's failure never aborts the run; outcomes are aggregated and
//! streamed to observers as [`orchestration::ProgressSnapshot`]s.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Static action catalog and confirmation gate
//! - [`request`] - Execution configuration builder
//! - [`state_machine`] - Run lifecycle states, events and transitions
//! - [`orchestration`] - The bulk executor and its run state
//! - [`events`] - Progress snapshot broadcasting
//! - [`presenter`] - Pure rendering of snapshots for display
//! - [`config`] - Engine tunables
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bulkops_core::catalog::ActionCatalog;
//! use bulkops_core::orchestration::BulkExecutor;
//! use bulkops_core::request::ExecutionRequestBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ActionCatalog::standard();
//! let action = catalog.get("bulk-archive").expect("catalog entry");
//!
//! let request = ExecutionRequestBuilder::new(action)
//!     .batch_size(25)
//!     .dry_run(true)
//!     .build();
//!
//! let executor = BulkExecutor::new();
//! let _progress = executor.subscribe();
//! // let summary = executor.execute(request, apply_fn).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod orchestration;
pub mod presenter;
pub mod request;
pub mod state_machine;

pub use catalog::{requires_confirmation, ActionCatalog, ActionType, BulkAction};
pub use config::BulkOpsConfig;
pub use error::{BulkOpsError, Result};
pub use events::ProgressPublisher;
pub use orchestration::{
    ApplyAction, BulkExecutor, ItemError, ItemFailure, OperationItem, OrchestrationError,
    ProgressSnapshot, RunState, RunSummary,
};
pub use presenter::{render_report, RunReport};
pub use request::{ExecutionRequest, ExecutionRequestBuilder};
pub use state_machine::{RunEvent, RunStatus, StateMachineError};

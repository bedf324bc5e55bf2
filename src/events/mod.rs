//! # Event System
//!
//! Progress snapshot broadcasting for UI observers.

pub mod publisher;

pub use publisher::ProgressPublisher;

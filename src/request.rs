//! # Execution Configuration Builder
//!
//! Assembles the immutable [`ExecutionRequest`] handed to the executor.
//! The builder validates nothing beyond clamping the batch size into
//! `[1, max_batch_size]`; input validation belongs at the UI edge, and the
//! executor itself treats an empty item set as a zero-item run.

use crate::catalog::BulkAction;
use crate::config::BulkOpsConfig;
use crate::orchestration::types::OperationItem;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// One run's worth of input, never mutated after being handed to the
/// executor. Items are opaque beyond their id/label accessors; parameters
/// are passed through to the per-item operation untouched.
#[derive(Clone)]
pub struct ExecutionRequest {
    pub action: Arc<BulkAction>,
    pub items: Vec<Arc<dyn OperationItem>>,
    pub parameters: HashMap<String, Value>,
    pub dry_run: bool,
    pub batch_size: usize,
}

impl std::fmt::Debug for ExecutionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionRequest")
            .field("action", &self.action.id)
            .field("items", &self.items.len())
            .field("parameters", &self.parameters)
            .field("dry_run", &self.dry_run)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

/// Fluent builder for [`ExecutionRequest`]
pub struct ExecutionRequestBuilder {
    action: Arc<BulkAction>,
    items: Vec<Arc<dyn OperationItem>>,
    parameters: HashMap<String, Value>,
    dry_run: bool,
    batch_size: usize,
    max_batch_size: usize,
}

impl ExecutionRequestBuilder {
    pub fn new(action: Arc<BulkAction>) -> Self {
        Self::with_config(action, &BulkOpsConfig::default())
    }

    pub fn with_config(action: Arc<BulkAction>, config: &BulkOpsConfig) -> Self {
        Self {
            action,
            items: Vec::new(),
            parameters: HashMap::new(),
            dry_run: false,
            batch_size: config.default_batch_size,
            max_batch_size: config.max_batch_size,
        }
    }

    pub fn items(mut self, items: Vec<Arc<dyn OperationItem>>) -> Self {
        self.items = items;
        self
    }

    pub fn item(mut self, item: Arc<dyn OperationItem>) -> Self {
        self.items.push(item);
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    pub fn parameters(mut self, parameters: HashMap<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Out-of-range batch sizes are silently clamped, not rejected.
    pub fn build(self) -> ExecutionRequest {
        ExecutionRequest {
            action: self.action,
            items: self.items,
            parameters: self.parameters,
            dry_run: self.dry_run,
            batch_size: self.batch_size.clamp(1, self.max_batch_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ActionType, BulkAction};

    struct StubItem(&'static str);

    impl OperationItem for StubItem {
        fn id(&self) -> String {
            self.0.to_string()
        }
        fn label(&self) -> String {
            self.0.to_uppercase()
        }
    }

    fn archive_action() -> Arc<BulkAction> {
        Arc::new(BulkAction::new(
            "bulk-archive",
            ActionType::Archive,
            "Archive",
            "",
        ))
    }

    #[test]
    fn test_builder_defaults() {
        let request = ExecutionRequestBuilder::new(archive_action()).build();
        assert_eq!(request.batch_size, BulkOpsConfig::default().default_batch_size);
        assert!(request.items.is_empty());
        assert!(!request.dry_run);
    }

    #[test]
    fn test_batch_size_clamped_high() {
        let config = BulkOpsConfig {
            max_batch_size: 25,
            ..Default::default()
        };
        let request = ExecutionRequestBuilder::with_config(archive_action(), &config)
            .batch_size(10_000)
            .build();
        assert_eq!(request.batch_size, 25);
    }

    #[test]
    fn test_batch_size_clamped_low() {
        let request = ExecutionRequestBuilder::new(archive_action())
            .batch_size(0)
            .build();
        assert_eq!(request.batch_size, 1);
    }

    #[test]
    fn test_parameters_pass_through() {
        let request = ExecutionRequestBuilder::new(archive_action())
            .item(Arc::new(StubItem("sku-1")))
            .parameter("target_folder", serde_json::json!("2026-archive"))
            .dry_run(true)
            .build();
        assert_eq!(request.items.len(), 1);
        assert!(request.dry_run);
        assert_eq!(
            request.parameters.get("target_folder"),
            Some(&serde_json::json!("2026-archive"))
        );
    }
}

use crate::error::{BulkOpsError, Result};

/// Engine tunables shared by the request builder and the executor.
#[derive(Debug, Clone)]
pub struct BulkOpsConfig {
    /// Hard ceiling applied to every requested batch size
    pub max_batch_size: usize,
    /// Batch size used when the caller does not specify one
    pub default_batch_size: usize,
    /// Capacity of the progress broadcast channel
    pub event_channel_capacity: usize,
}

impl Default for BulkOpsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 100,
            default_batch_size: 10,
            event_channel_capacity: 1024,
        }
    }
}

impl BulkOpsConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(max_batch) = std::env::var("BULKOPS_MAX_BATCH_SIZE") {
            config.max_batch_size = max_batch.parse().map_err(|e| {
                BulkOpsError::ConfigurationError(format!("Invalid max_batch_size: {e}"))
            })?;
        }

        if let Ok(default_batch) = std::env::var("BULKOPS_DEFAULT_BATCH_SIZE") {
            config.default_batch_size = default_batch.parse().map_err(|e| {
                BulkOpsError::ConfigurationError(format!("Invalid default_batch_size: {e}"))
            })?;
        }

        if let Ok(capacity) = std::env::var("BULKOPS_EVENT_CHANNEL_CAPACITY") {
            config.event_channel_capacity = capacity.parse().map_err(|e| {
                BulkOpsError::ConfigurationError(format!("Invalid event_channel_capacity: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(BulkOpsError::ConfigurationError(
                "max_batch_size must be at least 1".to_string(),
            ));
        }
        if self.default_batch_size == 0 || self.default_batch_size > self.max_batch_size {
            return Err(BulkOpsError::ConfigurationError(format!(
                "default_batch_size must be in 1..={}",
                self.max_batch_size
            )));
        }
        if self.event_channel_capacity == 0 {
            return Err(BulkOpsError::ConfigurationError(
                "event_channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

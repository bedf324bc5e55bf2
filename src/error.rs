use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BulkOpsError {
    StateTransitionError(String),
    OrchestrationError(String),
    ConfigurationError(String),
}

impl fmt::Display for BulkOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkOpsError::StateTransitionError(msg) => write!(f, "State transition error: {msg}"),
            BulkOpsError::OrchestrationError(msg) => write!(f, "Orchestration error: {msg}"),
            BulkOpsError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for BulkOpsError {}

pub type Result<T> = std::result::Result<T, BulkOpsError>;

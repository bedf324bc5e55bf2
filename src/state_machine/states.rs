use serde::{Deserialize, Serialize};
use std::fmt;

/// Run lifecycle states for a bulk execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No run has started yet (or the executor was reset)
    Idle,
    /// Batches are being dispatched
    Running,
    /// Dispatch is suspended; the in-flight batch has drained
    Paused,
    /// All items resolved with zero failures
    Completed,
    /// All items resolved with at least one failure
    Error,
    /// Stopped by the caller before all items resolved
    Cancelled,
}

impl RunStatus {
    /// Check if this is a terminal state (no further transitions without a reset)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error | Self::Cancelled)
    }

    /// Check if a run is live (dispatching or suspended)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl Default for RunStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Paused => write!(f, "paused"),
            Self::Completed => write!(f, "completed"),
            Self::Error => write!(f, "error"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for RunStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "running" => Ok(Self::Running),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "error" => Ok(Self::Error),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid run status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_check() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Error.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
        assert!(!RunStatus::Idle.is_terminal());
        assert!(!RunStatus::Running.is_terminal());
        assert!(!RunStatus::Paused.is_terminal());
    }

    #[test]
    fn test_active_check() {
        assert!(RunStatus::Running.is_active());
        assert!(RunStatus::Paused.is_active());
        assert!(!RunStatus::Idle.is_active());
        assert!(!RunStatus::Completed.is_active());
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(RunStatus::Paused.to_string(), "paused");
        assert_eq!("cancelled".parse::<RunStatus>().unwrap(), RunStatus::Cancelled);
        assert!("limbo".parse::<RunStatus>().is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&RunStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
        let parsed: RunStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RunStatus::Running);
    }
}

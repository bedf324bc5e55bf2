use serde::{Deserialize, Serialize};

/// Events that can trigger run state transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RunEvent {
    /// Start a new run
    Execute,
    /// Suspend dispatch after the in-flight batch drains
    Pause,
    /// Resume dispatch from the current index
    Resume,
    /// Stop the run; the in-flight batch is still recorded
    Cancel,
    /// All items resolved; carries the failure count
    Finish { failures: usize },
    /// Return a terminal executor to idle for a fresh run
    Reset,
}

impl RunEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Execute => "execute",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Cancel => "cancel",
            Self::Finish { .. } => "finish",
            Self::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_strings() {
        assert_eq!(RunEvent::Execute.event_type(), "execute");
        assert_eq!(RunEvent::Finish { failures: 2 }.event_type(), "finish");
    }
}

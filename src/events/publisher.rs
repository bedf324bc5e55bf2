use crate::orchestration::types::ProgressSnapshot;
use tokio::sync::broadcast;

/// Broadcast feed of run progress snapshots.
///
/// Subscribers receive a snapshot after every item resolution and every
/// status transition. Publishing never blocks and never fails the run: a
/// feed with no subscribers simply drops the snapshot, and a slow
/// subscriber loses old snapshots to the channel's ring buffer rather than
/// back-pressuring the executor.
#[derive(Debug, Clone)]
pub struct ProgressPublisher {
    sender: broadcast::Sender<ProgressSnapshot>,
}

impl ProgressPublisher {
    /// Create a new publisher with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a snapshot to all current subscribers
    pub fn publish(&self, snapshot: ProgressSnapshot) {
        // send() errors only when there are no subscribers, which is fine
        let _ = self.sender.send(snapshot);
    }

    /// Subscribe to the snapshot feed
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressSnapshot> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ProgressPublisher {
    fn default() -> Self {
        Self::new(1024)
    }
}

use tokio::sync::broadcast;
use tracing::trace;

use super::protocol::SessionEvent;

/// Outbound side of a session. Implementations must not block.
pub trait Broadcaster: Send + Sync {
    fn publish(&self, event: SessionEvent);
}

/// Fan-out over a tokio broadcast channel. Slow subscribers lag and lose
/// old events; the session never waits for them.
pub struct ChannelHub {
    sender: broadcast::Sender<SessionEvent>,
}

impl ChannelHub {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChannelHub {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Broadcaster for ChannelHub {
    fn publish(&self, event: SessionEvent) {
        // Err only means nobody is listening right now.
        if self.sender.send(event).is_err() {
            trace!("no subscribers for session event");
        }
    }
}

/// Drops everything. For sessions nobody watches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBroadcaster;

impl Broadcaster for NullBroadcaster {
    fn publish(&self, _event: SessionEvent) {}
}

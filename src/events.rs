//! `object:modified` publication.
//!
//! One broadcast channel per editor. The editor is the only publisher;
//! subscribers (style panels, layer lists) only read. Each event carries a
//! snapshot of the object as it was right after the mutation.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::object::RenderObject;

/// Wire name of the modification event.
pub const OBJECT_MODIFIED: &str = "object:modified";

const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorEvent {
    #[serde(rename = "object:modified")]
    ObjectModified(RenderObject),
}

impl EditorEvent {
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ObjectModified(_) => OBJECT_MODIFIED,
        }
    }
}

pub struct EventBus {
    tx: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    /// Bus keeping at most `capacity` undelivered events per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish an event to every current subscriber. Returns how many
    /// subscribers received it; zero is not an error.
    pub fn publish(&self, event: EditorEvent) -> usize {
        let event_type = event.event_type();
        match self.tx.send(event) {
            Ok(receivers) => {
                tracing::trace!(event_type, receivers, "event published");
                receivers
            }
            Err(_) => {
                tracing::trace!(event_type, "event published with no subscribers");
                0
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

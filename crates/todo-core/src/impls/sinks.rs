//! EventSink implementations.

use std::sync::Mutex;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::domain::ListEvent;
use crate::ports::EventSink;

/// Logs every event at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ListEvent) {
        debug!(event = event.name(), ?event, "list event");
    }
}

/// Forwards events to a channel; the rendering surface redraws on receive.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<ListEvent>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<ListEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: &ListEvent) {
        // receiver gone means the surface shut down
        if self.tx.send(event.clone()).is_err() {
            debug!(event = event.name(), "event dropped; no receiver");
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ListEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &ListEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn channel_sink_forwards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = ChannelSink::new(tx);

        sink.emit(&ListEvent::EditCancelled);

        assert_eq!(rx.try_recv().unwrap(), ListEvent::EditCancelled);
    }

    #[test]
    fn channel_sink_tolerates_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ChannelSink::new(tx).emit(&ListEvent::EditCancelled);
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&ListEvent::EditStarted { index: 0 });
        sink.emit(&ListEvent::EditCancelled);

        assert_eq!(
            sink.events(),
            vec![ListEvent::EditStarted { index: 0 }, ListEvent::EditCancelled]
        );

        sink.clear();
        assert!(sink.events().is_empty());
    }
}

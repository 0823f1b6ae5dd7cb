//! The dispatcher seam and the in-memory sink.

use crate::DispatchEvent;

/// Errors a dispatcher can surface
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Event rejected by dispatcher: {reason}")]
    Rejected { reason: String },
}

/// Result alias for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// A sink for dispatch events.
///
/// Implementations take each event by value: an event is consumed exactly
/// once and cannot be resubmitted. Transport concerns (retries, batching,
/// persistence) live behind this trait, not in front of it.
pub trait EventDispatcher {
    fn dispatch_event(&mut self, event: DispatchEvent) -> DispatchResult<()>;
}

/// In-memory sink recording dispatched events in order.
///
/// Used by tests and the debugger; never by production transport.
#[derive(Debug, Default)]
pub struct InMemoryDispatcher {
    sent: Vec<DispatchEvent>,
}

impl InMemoryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events dispatched so far, oldest first
    pub fn sent(&self) -> &[DispatchEvent] {
        &self.sent
    }

    /// Drain all recorded events
    pub fn drain(&mut self) -> Vec<DispatchEvent> {
        std::mem::take(&mut self.sent)
    }
}

impl EventDispatcher for InMemoryDispatcher {
    fn dispatch_event(&mut self, event: DispatchEvent) -> DispatchResult<()> {
        tracing::debug!(
            destination = %event.destination(),
            bytes = event.payload().len(),
            "Event recorded by in-memory dispatcher"
        );
        self.sent.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_dispatcher_records_in_order() {
        let mut dispatcher = InMemoryDispatcher::new();

        dispatcher
            .dispatch_event(DispatchEvent::new(b"first".to_vec()))
            .unwrap();
        dispatcher
            .dispatch_event(DispatchEvent::new(b"second".to_vec()))
            .unwrap();

        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].payload(), b"first");
        assert_eq!(sent[1].payload(), b"second");
    }

    #[test]
    fn test_drain_empties_the_sink() {
        let mut dispatcher = InMemoryDispatcher::new();
        dispatcher
            .dispatch_event(DispatchEvent::new(vec![0u8; 4]))
            .unwrap();

        let drained = dispatcher.drain();
        assert_eq!(drained.len(), 1);
        assert!(dispatcher.sent().is_empty());
    }
}

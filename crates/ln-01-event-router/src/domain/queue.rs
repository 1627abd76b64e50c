use std::collections::VecDeque;

use super::event::DeferredEvent;

/// FIFO buffer of events waiting for a live render surface.
///
/// Unbounded: activation events are user-driven and arrive a handful of
/// times per launch at most.
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    events: VecDeque<DeferredEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DeferredEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl IntoIterator for EventQueue {
    type Item = DeferredEvent;
    type IntoIter = std::collections::vec_deque::IntoIter<DeferredEvent>;

    /// Consumes the queue, yielding events in enqueue order.
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;

    #[test]
    fn test_into_iter_preserves_order() {
        let mut queue = EventQueue::new();
        for url in ["lisk://a", "lisk://b", "lisk://c"] {
            queue.push(DeferredEvent::new(EventKind::OpenUrl, url));
        }
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue
            .into_iter()
            .map(|e| e.payload().as_str().unwrap().to_string())
            .collect();
        assert_eq!(drained, vec!["lisk://a", "lisk://b", "lisk://c"]);
    }

    #[test]
    fn test_same_kind_is_not_coalesced() {
        let mut queue = EventQueue::new();
        queue.push(DeferredEvent::new(EventKind::Focus, serde_json::Value::Null));
        queue.push(DeferredEvent::new(EventKind::Focus, serde_json::Value::Null));
        assert_eq!(queue.len(), 2);
    }
}

//! Observer registry for change notification
//!
//! A minimal subscriber list: callbacks are invoked synchronously, in
//! registration order, before the mutating call returns. No queuing and no
//! background delivery.

use super::event::ChangeEvent;
use std::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&ChangeEvent)>;

/// Ordered list of change-notification subscribers
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Callback)>,
}

impl Observers {
    pub fn new() -> Self {
        Observers {
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback; it will see every subsequent event until
    /// unsubscribed.
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber; returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        match self.subscribers.iter().position(|(sid, _)| *sid == id) {
            Some(pos) => {
                self.subscribers.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver an event to every subscriber, in registration order.
    pub(crate) fn notify(&mut self, event: &ChangeEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }
}

impl Default for Observers {
    fn default() -> Self {
        Observers::new()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::VertexId;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn payload_event(n: u64) -> ChangeEvent {
        ChangeEvent::PayloadChanged {
            vertex: VertexId::new(n),
        }
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        for tag in ["a", "b", "c"] {
            let sink = Rc::clone(&seen);
            observers.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        observers.notify(&payload_event(1));
        assert_eq!(*seen.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();

        let sink = Rc::clone(&count);
        let id = observers.subscribe(move |_| *sink.borrow_mut() += 1);

        observers.notify(&payload_event(1));
        assert!(observers.unsubscribe(id));
        observers.notify(&payload_event(2));

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut observers = Observers::new();
        let id = observers.subscribe(|_| {});
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
    }

    #[test]
    fn test_subscribers_see_event_contents() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let sink = Rc::clone(&seen);
        observers.subscribe(move |event| sink.borrow_mut().push(*event));

        observers.notify(&payload_event(7));
        assert_eq!(*seen.borrow(), vec![payload_event(7)]);
    }
}

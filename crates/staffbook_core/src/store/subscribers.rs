//! Ordered observer registry for collection snapshots.

use crate::model::employee::Employee;

/// Callback receiving the full collection snapshot.
pub type Subscriber = Box<dyn FnMut(&[Employee])>;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "dropping the handle makes the subscription impossible to cancel"]
pub struct Subscription(u64);

/// Subscribers in registration order.
#[derive(Default)]
pub struct SubscriberRegistry {
    next_id: u64,
    entries: Vec<(Subscription, Subscriber)>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and replays the current snapshot to it.
    pub fn register(&mut self, mut callback: Subscriber, snapshot: &[Employee]) -> Subscription {
        let handle = Subscription(self.next_id);
        self.next_id += 1;
        callback(snapshot);
        self.entries.push((handle, callback));
        handle
    }

    /// Removes a callback. Returns `false` when it was already removed.
    pub fn remove(&mut self, handle: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != handle);
        self.entries.len() < before
    }

    /// Delivers a snapshot to every subscriber in registration order.
    pub fn notify(&mut self, snapshot: &[Employee]) {
        for (_, callback) in self.entries.iter_mut() {
            callback(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

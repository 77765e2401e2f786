use super::model::CartSnapshot;

pub type SnapshotListener = Box<dyn Fn(&CartSnapshot) + Send>;

/// Handle returned by `subscribe`, used to detach a listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Listeners interested in cart snapshots, called in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, SnapshotListener)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, listener: SnapshotListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn publish(&self, snapshot: &CartSnapshot) {
        for (_, listener) in &self.listeners {
            listener(snapshot);
        }
    }
}

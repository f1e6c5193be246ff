//! Change-listener registry and the cancellation handle it hands out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Weak;

use parking_lot::RwLock;
use tracing::debug;
use tradelog_core::Settings;

/// Callback invoked with the post-change snapshot.
pub(crate) type Listener = std::sync::Arc<dyn Fn(&Settings) + Send + Sync>;

/// Registered listeners, kept in subscription order.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&self, listener: Listener) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().push((id, listener));
        id
    }

    /// Remove a listener by id. Returns whether it was still registered.
    pub(crate) fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// Invoke every listener with the snapshot, in registration order.
    ///
    /// Listeners are cloned out first so none of them runs under the
    /// registry lock; a listener may subscribe or cancel re-entrantly.
    pub(crate) fn notify(&self, settings: &Settings) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(settings);
        }
    }
}

/// Handle for one registered settings listener.
///
/// `cancel` is idempotent: repeated calls, and calls after the store has
/// been dropped, are no-ops. Dropping the handle without cancelling
/// leaves the listener registered.
pub struct Subscription {
    registry: Weak<SubscriberRegistry>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<SubscriberRegistry>, id: u64) -> Self {
        Self { registry, id }
    }

    /// Unregister the listener.
    pub fn cancel(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.remove(self.id) {
                debug!(id = self.id, "Settings listener cancelled");
            }
        }
    }

    /// Registry-assigned listener id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

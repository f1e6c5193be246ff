//! The settings store: hydration, updates, reset, change notification.
//!
//! The store owns the single authoritative `Settings` value for the
//! process. Consumers read snapshots and subscribe for post-change
//! snapshots; writes go through typed keys, so an unknown key is rejected
//! before anything mutates. Persistence is fire-and-forget through the
//! injected adapter: a failed save never blocks the in-memory update or
//! the notification that follows it.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use tradelog_core::{Result, Settings, SettingsKey, SettingsValue};
use tradelog_persistence::PersistenceAdapter;

use crate::subscription::{SubscriberRegistry, Subscription};

/// Store lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Constructed, not yet hydrated from storage. Reads return defaults.
    #[default]
    Uninitialized,
    /// Hydrated; reads and writes are live.
    Ready,
}

struct StoreInner {
    settings: Settings,
    lifecycle: Lifecycle,
}

/// In-memory settings state over a persistence adapter.
///
/// Every mutation happens under a short write lock and hands out a
/// post-mutation clone, so consumers never observe a partially applied
/// update. The adapter and the listeners run with no lock held.
pub struct SettingsStore {
    adapter: Arc<dyn PersistenceAdapter>,
    inner: RwLock<StoreInner>,
    subscribers: Arc<SubscriberRegistry>,
}

impl SettingsStore {
    /// Create a store over the given adapter. No storage is touched
    /// until `initialize`.
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            adapter,
            inner: RwLock::new(StoreInner {
                settings: Settings::default(),
                lifecycle: Lifecycle::Uninitialized,
            }),
            subscribers: Arc::new(SubscriberRegistry::new()),
        }
    }

    /// Hydrate from storage and transition to `Ready`.
    ///
    /// A stored blob replaces the in-memory value (fields it does not
    /// carry keep their defaults); no blob keeps pristine defaults
    /// either way. Subscribers are not notified. Calling this on a
    /// `Ready` store is a no-op returning the current snapshot.
    pub fn initialize(&self) -> Settings {
        {
            let inner = self.inner.read();
            if inner.lifecycle == Lifecycle::Ready {
                debug!("Settings store already initialized");
                return inner.settings.clone();
            }
        }

        // The adapter may hit the filesystem; keep it outside the lock.
        let loaded = self.adapter.load();

        let mut inner = self.inner.write();
        if inner.lifecycle == Lifecycle::Ready {
            return inner.settings.clone();
        }
        match loaded {
            Some(settings) => {
                inner.settings = settings;
                info!("Settings hydrated from storage");
            }
            None => {
                info!("No stored settings, starting from defaults");
            }
        }
        inner.lifecycle = Lifecycle::Ready;
        inner.settings.clone()
    }

    /// Immutable snapshot of the current settings.
    pub fn get(&self) -> Settings {
        self.inner.read().settings.clone()
    }

    /// Set one field, persist the new blob, and notify subscribers.
    ///
    /// Returns the post-update snapshot. A value whose kind does not
    /// match the field returns `Err` with nothing mutated, nothing
    /// saved, and nobody notified.
    pub fn update(
        &self,
        key: SettingsKey,
        value: impl Into<SettingsValue>,
    ) -> Result<Settings> {
        let value = value.into();
        let snapshot = {
            let mut inner = self.inner.write();
            inner.settings.apply(key, value)?;
            inner.settings.clone()
        };
        debug!(key = %key, "Settings updated");
        self.commit(&snapshot);
        Ok(snapshot)
    }

    /// Set one field addressed by its wire key.
    ///
    /// An unknown key is rejected with `CoreError::UnknownKey`: state is
    /// untouched, nothing is written, and no subscriber runs.
    pub fn update_by_name(&self, key: &str, value: SettingsValue) -> Result<Settings> {
        let parsed: SettingsKey = match key.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key = %key, "Rejected settings update for unknown key");
                return Err(e);
            }
        };
        self.update(parsed, value)
    }

    /// Replace everything with defaults, persist, and notify.
    pub fn reset(&self) -> Settings {
        let snapshot = {
            let mut inner = self.inner.write();
            inner.settings = Settings::default();
            inner.settings.clone()
        };
        info!("Settings reset to defaults");
        self.commit(&snapshot);
        snapshot
    }

    /// Register a listener invoked once per successful update or reset
    /// with the post-change snapshot.
    ///
    /// Hydration does not notify. The returned handle cancels the
    /// subscription; dropping it without cancelling leaves the listener
    /// registered for the life of the store.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Settings) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.subscribers.add(Arc::new(listener));
        debug!(id, count = self.subscribers.len(), "Settings listener registered");
        Subscription::new(Arc::downgrade(&self.subscribers), id)
    }

    /// Number of currently registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.read().lifecycle
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle() == Lifecycle::Ready
    }

    /// Persist then notify. Save failures are the adapter's to log; the
    /// notification always runs.
    fn commit(&self, snapshot: &Settings) {
        self.adapter.save(snapshot);
        self.subscribers.notify(snapshot);
    }
}

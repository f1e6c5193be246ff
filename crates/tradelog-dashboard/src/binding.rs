//! Consumer-side binding to the settings store.
//!
//! Dashboard surfaces never poll the store. A binding caches the latest
//! snapshot, bumps a revision counter on every change (the re-render
//! trigger), and exposes the derived view on demand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use tradelog_core::Settings;
use tradelog_settings::{SettingsStore, Subscription};

use crate::view::DashboardView;

/// A live, cached connection between one consumer and the store.
pub struct SettingsBinding {
    cache: Arc<RwLock<Settings>>,
    revision: Arc<AtomicU64>,
    subscription: Subscription,
}

impl SettingsBinding {
    /// Bind to a store.
    ///
    /// Subscribes before priming the cache, so a change landing between
    /// the two steps is never missed. The revision counter starts at 0
    /// and counts change notifications only.
    pub fn attach(store: &Arc<SettingsStore>) -> Self {
        let cache = Arc::new(RwLock::new(Settings::default()));
        let revision = Arc::new(AtomicU64::new(0));

        let cache_ref = cache.clone();
        let revision_ref = revision.clone();
        let subscription = store.subscribe(move |settings: &Settings| {
            *cache_ref.write() = settings.clone();
            revision_ref.fetch_add(1, Ordering::SeqCst);
        });

        *cache.write() = store.get();
        debug!(subscription_id = subscription.id(), "Dashboard binding attached");

        Self {
            cache,
            revision,
            subscription,
        }
    }

    /// Latest cached settings snapshot.
    pub fn settings(&self) -> Settings {
        self.cache.read().clone()
    }

    /// Number of change notifications received since attach.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Derive the dashboard view from the cached snapshot.
    pub fn view(&self) -> DashboardView {
        DashboardView::from_settings(&self.settings())
    }

    /// Stop tracking changes. The cache keeps its last snapshot.
    pub fn detach(&self) {
        self.subscription.cancel();
        debug!(subscription_id = self.subscription.id(), "Dashboard binding detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelog_core::SettingsKey;
    use tradelog_persistence::MemoryAdapter;

    fn ready_store() -> Arc<SettingsStore> {
        let store = Arc::new(SettingsStore::new(Arc::new(MemoryAdapter::new())));
        store.initialize();
        store
    }

    #[test]
    fn test_attach_primes_cache_from_store() {
        let store = ready_store();
        store.update(SettingsKey::PlayerName, "Primed").unwrap();

        let binding = SettingsBinding::attach(&store);
        assert_eq!(binding.settings().player_name, "Primed");
        assert_eq!(binding.revision(), 0);
    }

    #[test]
    fn test_binding_tracks_store_changes() {
        let store = ready_store();
        let binding = SettingsBinding::attach(&store);

        store.update(SettingsKey::CompactMode, true).unwrap();
        assert!(binding.settings().compact_mode);
        assert_eq!(binding.revision(), 1);

        store.update(SettingsKey::PlayerName, "Yuki").unwrap();
        assert_eq!(binding.settings().player_name, "Yuki");
        assert_eq!(binding.revision(), 2);
    }

    #[test]
    fn test_detach_stops_tracking_and_keeps_last_snapshot() {
        let store = ready_store();
        let binding = SettingsBinding::attach(&store);

        store.update(SettingsKey::PlayerName, "Before").unwrap();
        binding.detach();
        store.update(SettingsKey::PlayerName, "After").unwrap();

        assert_eq!(binding.settings().player_name, "Before");
        assert_eq!(binding.revision(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_view_follows_cached_snapshot() {
        let store = ready_store();
        let binding = SettingsBinding::attach(&store);

        store.update(SettingsKey::ShowBenchmarkBtc, false).unwrap();
        store.update(SettingsKey::CompactMode, true).unwrap();

        let view = binding.view();
        assert!(!view.panels.contains(&crate::view::PanelKind::BenchmarkBtc));
        assert_eq!(view.layout, crate::view::LayoutDensity::Compact);
    }

    #[test]
    fn test_detach_after_store_dropped_is_safe() {
        let binding = {
            let store = ready_store();
            SettingsBinding::attach(&store)
        };
        binding.detach();
        assert_eq!(binding.settings(), Settings::default());
    }

    #[test]
    fn test_two_bindings_track_independently() {
        let store = ready_store();
        let first = SettingsBinding::attach(&store);
        let second = SettingsBinding::attach(&store);

        store.update(SettingsKey::CompactMode, true).unwrap();
        assert_eq!(first.revision(), 1);
        assert_eq!(second.revision(), 1);

        first.detach();
        store.update(SettingsKey::CompactMode, false).unwrap();
        assert_eq!(first.revision(), 1);
        assert_eq!(second.revision(), 2);
    }
}

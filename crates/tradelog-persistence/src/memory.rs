//! In-memory adapter for ephemeral operation and tests.

use parking_lot::RwLock;
use tradelog_core::Settings;

use crate::adapter::PersistenceAdapter;

/// Process-local settings storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    blob: RwLock<Option<Settings>>,
}

impl MemoryAdapter {
    /// Create an adapter with nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter pre-seeded with a stored blob.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            blob: RwLock::new(Some(settings)),
        }
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Option<Settings> {
        self.blob.read().clone()
    }

    fn save(&self, settings: &Settings) {
        *self.blob.write() = Some(settings.clone());
    }
}

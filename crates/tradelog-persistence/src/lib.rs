//! Durable settings storage for the trading journal dashboard.
//!
//! Provides the `PersistenceAdapter` trait the settings store is built
//! over, plus the two concrete adapters: `JsonFileAdapter` (one JSON file
//! at a fixed path) and `MemoryAdapter` (process-local, for tests and
//! ephemeral runs).

pub mod adapter;
pub mod error;
pub mod memory;

pub use adapter::{default_path, JsonFileAdapter, PersistenceAdapter};
pub use error::{PersistenceError, PersistenceResult};
pub use memory::MemoryAdapter;

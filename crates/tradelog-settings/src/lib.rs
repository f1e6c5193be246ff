//! Settings store for the trading journal dashboard.
//!
//! Owns the authoritative in-memory `Settings` value: hydrates it from an
//! injected `PersistenceAdapter`, applies typed updates, persists each
//! change, and notifies subscribers synchronously with post-change
//! snapshots.

pub mod store;
pub mod subscription;

pub use store::{Lifecycle, SettingsStore};
pub use subscription::Subscription;

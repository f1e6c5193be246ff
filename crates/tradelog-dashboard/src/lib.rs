//! Settings-driven dashboard surface for the trading journal.
//!
//! Two pieces: `DashboardView`, the pure projection of a settings
//! snapshot into renderable state, and `SettingsBinding`, the cached
//! consumer-side connection to the settings store.

pub mod binding;
pub mod view;

pub use binding::SettingsBinding;
pub use view::{DashboardView, HeatmapStyle, LayoutDensity, PanelKind};

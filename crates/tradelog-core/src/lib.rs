//! Core domain types for the trading journal dashboard.
//!
//! This crate provides the fundamental types shared by the settings store
//! and its consumers:
//! - `Settings`: the full dashboard preference record
//! - `SettingsKey`, `SettingsValue`: typed field addressing for dynamic updates
//! - `AiPersonality`: the AI coach persona enum

pub mod error;
pub mod field;
pub mod personality;
pub mod settings;

pub use error::{CoreError, Result};
pub use field::{SettingsKey, SettingsValue, ValueKind};
pub use personality::AiPersonality;
pub use settings::Settings;

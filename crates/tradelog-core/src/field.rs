//! Settings field surface: keys, value kinds, and dynamic values.
//!
//! The schema is a fixed set of named fields. [`SettingsKey`] enumerates
//! them, [`SettingsValue`] carries a value for one field, and the two meet
//! in [`Settings::apply`](crate::Settings::apply). Update paths that start
//! from a string key go through [`SettingsKey::from_str`], which rejects
//! names outside the schema.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::personality::AiPersonality;

/// Identifier for one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    PlayerName,
    AiPersonality,
    ShowAiTiltMeter,
    ShowMaeMfe,
    ShowPnlHeatmap,
    ShowLiquidityHeatmap,
    UseDiscreteHeatmap,
    ShowBenchmarkBtc,
    CompactMode,
}

impl SettingsKey {
    /// All known keys in schema order.
    pub const ALL: [SettingsKey; 9] = [
        Self::PlayerName,
        Self::AiPersonality,
        Self::ShowAiTiltMeter,
        Self::ShowMaeMfe,
        Self::ShowPnlHeatmap,
        Self::ShowLiquidityHeatmap,
        Self::UseDiscreteHeatmap,
        Self::ShowBenchmarkBtc,
        Self::CompactMode,
    ];

    /// Wire key, exactly as it appears in the persisted blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerName => "playerName",
            Self::AiPersonality => "aiPersonality",
            Self::ShowAiTiltMeter => "showAITiltMeter",
            Self::ShowMaeMfe => "showMAEFE",
            Self::ShowPnlHeatmap => "showPnLHeatmap",
            Self::ShowLiquidityHeatmap => "showLiquidityHeatmap",
            Self::UseDiscreteHeatmap => "useDiscreteHeatmap",
            Self::ShowBenchmarkBtc => "showBenchmarkBTC",
            Self::CompactMode => "compactMode",
        }
    }

    /// The value kind this field accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::PlayerName => ValueKind::Text,
            Self::AiPersonality => ValueKind::Personality,
            Self::ShowAiTiltMeter
            | Self::ShowMaeMfe
            | Self::ShowPnlHeatmap
            | Self::ShowLiquidityHeatmap
            | Self::UseDiscreteHeatmap
            | Self::ShowBenchmarkBtc
            | Self::CompactMode => ValueKind::Toggle,
        }
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SettingsKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey(s.to_string()))
    }
}

/// Kind of value a settings field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Personality,
    Toggle,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Personality => "personality",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dynamically-typed value for one settings field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValue {
    Text(String),
    Personality(AiPersonality),
    Toggle(bool),
}

impl SettingsValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Personality(_) => ValueKind::Personality,
            Self::Toggle(_) => ValueKind::Toggle,
        }
    }

    /// Parse a raw string into the value kind `key` accepts.
    ///
    /// Toggle fields accept `true`/`false`, `1`/`0`, `yes`/`no`.
    pub fn parse_for_key(key: SettingsKey, raw: &str) -> Result<Self> {
        match key.kind() {
            ValueKind::Text => Ok(Self::Text(raw.to_string())),
            ValueKind::Personality => Ok(Self::Personality(raw.parse()?)),
            ValueKind::Toggle => parse_toggle(raw).map(Self::Toggle),
        }
    }
}

fn parse_toggle(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CoreError::InvalidToggle(raw.to_string())),
    }
}

impl fmt::Display for SettingsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => write!(f, "{v}"),
            Self::Personality(v) => write!(f, "{v}"),
            Self::Toggle(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for SettingsValue {
    fn from(v: bool) -> Self {
        Self::Toggle(v)
    }
}

impl From<AiPersonality> for SettingsValue {
    fn from(v: AiPersonality) -> Self {
        Self::Personality(v)
    }
}

impl From<String> for SettingsValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SettingsValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

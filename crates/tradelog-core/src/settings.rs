//! The settings record shared by every dashboard surface.
//!
//! One flat struct, always fully populated. Per-field serde defaults give
//! forward compatibility: a blob written before a field existed hydrates
//! with that field's default, and keys the schema no longer knows are
//! ignored on load.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::field::{SettingsKey, SettingsValue};
use crate::personality::AiPersonality;

/// Dashboard preferences for one trader profile.
///
/// The wire keys (serde renames) match the persisted JSON blob exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display label shown in greetings and session summaries.
    #[serde(rename = "playerName", default = "default_player_name")]
    pub player_name: String,
    /// AI coach persona.
    #[serde(rename = "aiPersonality", default)]
    pub ai_personality: AiPersonality,
    /// Show the AI tilt meter panel.
    #[serde(rename = "showAITiltMeter", default = "default_show_ai_tilt_meter")]
    pub show_ai_tilt_meter: bool,
    /// Show the MAE/MFE excursion panel.
    #[serde(rename = "showMAEFE", default = "default_show_mae_mfe")]
    pub show_mae_mfe: bool,
    /// Show the PnL calendar heatmap.
    #[serde(rename = "showPnLHeatmap", default = "default_show_pnl_heatmap")]
    pub show_pnl_heatmap: bool,
    /// Show the liquidity depth heatmap.
    #[serde(
        rename = "showLiquidityHeatmap",
        default = "default_show_liquidity_heatmap"
    )]
    pub show_liquidity_heatmap: bool,
    /// Render heatmaps with discrete buckets instead of a continuous ramp.
    #[serde(rename = "useDiscreteHeatmap", default)]
    pub use_discrete_heatmap: bool,
    /// Overlay the BTC benchmark curve on performance charts.
    #[serde(rename = "showBenchmarkBTC", default = "default_show_benchmark_btc")]
    pub show_benchmark_btc: bool,
    /// Dense layout for small screens.
    #[serde(rename = "compactMode", default)]
    pub compact_mode: bool,
}

fn default_player_name() -> String {
    "Trader".to_string()
}

fn default_show_ai_tilt_meter() -> bool {
    true
}

fn default_show_mae_mfe() -> bool {
    true
}

fn default_show_pnl_heatmap() -> bool {
    true
}

fn default_show_liquidity_heatmap() -> bool {
    true
}

fn default_show_benchmark_btc() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            ai_personality: AiPersonality::default(),
            show_ai_tilt_meter: default_show_ai_tilt_meter(),
            show_mae_mfe: default_show_mae_mfe(),
            show_pnl_heatmap: default_show_pnl_heatmap(),
            show_liquidity_heatmap: default_show_liquidity_heatmap(),
            use_discrete_heatmap: false,
            show_benchmark_btc: default_show_benchmark_btc(),
            compact_mode: false,
        }
    }
}

impl Settings {
    /// Current value of one field.
    pub fn value_of(&self, key: SettingsKey) -> SettingsValue {
        match key {
            SettingsKey::PlayerName => SettingsValue::Text(self.player_name.clone()),
            SettingsKey::AiPersonality => SettingsValue::Personality(self.ai_personality),
            SettingsKey::ShowAiTiltMeter => SettingsValue::Toggle(self.show_ai_tilt_meter),
            SettingsKey::ShowMaeMfe => SettingsValue::Toggle(self.show_mae_mfe),
            SettingsKey::ShowPnlHeatmap => SettingsValue::Toggle(self.show_pnl_heatmap),
            SettingsKey::ShowLiquidityHeatmap => {
                SettingsValue::Toggle(self.show_liquidity_heatmap)
            }
            SettingsKey::UseDiscreteHeatmap => SettingsValue::Toggle(self.use_discrete_heatmap),
            SettingsKey::ShowBenchmarkBtc => SettingsValue::Toggle(self.show_benchmark_btc),
            SettingsKey::CompactMode => SettingsValue::Toggle(self.compact_mode),
        }
    }

    /// Set one field from a dynamic value.
    ///
    /// A value whose kind does not match the field is rejected and the
    /// struct is left unchanged.
    pub fn apply(&mut self, key: SettingsKey, value: SettingsValue) -> Result<()> {
        match (key, value) {
            (SettingsKey::PlayerName, SettingsValue::Text(v)) => self.player_name = v,
            (SettingsKey::AiPersonality, SettingsValue::Personality(v)) => {
                self.ai_personality = v;
            }
            (SettingsKey::ShowAiTiltMeter, SettingsValue::Toggle(v)) => {
                self.show_ai_tilt_meter = v;
            }
            (SettingsKey::ShowMaeMfe, SettingsValue::Toggle(v)) => self.show_mae_mfe = v,
            (SettingsKey::ShowPnlHeatmap, SettingsValue::Toggle(v)) => self.show_pnl_heatmap = v,
            (SettingsKey::ShowLiquidityHeatmap, SettingsValue::Toggle(v)) => {
                self.show_liquidity_heatmap = v;
            }
            (SettingsKey::UseDiscreteHeatmap, SettingsValue::Toggle(v)) => {
                self.use_discrete_heatmap = v;
            }
            (SettingsKey::ShowBenchmarkBtc, SettingsValue::Toggle(v)) => {
                self.show_benchmark_btc = v;
            }
            (SettingsKey::CompactMode, SettingsValue::Toggle(v)) => self.compact_mode = v,
            (key, value) => {
                return Err(CoreError::TypeMismatch {
                    key,
                    expected: key.kind(),
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }
}

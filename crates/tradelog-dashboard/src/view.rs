//! Derived dashboard view.
//!
//! Pure projection of a `Settings` snapshot into what the dashboard
//! shell renders: greeting, coach persona, layout density, heatmap
//! style, and the ordered list of visible panels.

use chrono::Utc;
use serde::Serialize;

use tradelog_core::{AiPersonality, Settings};

/// A dashboard panel controlled by a visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// AI tilt meter.
    AiTiltMeter,
    /// MAE/MFE excursion chart.
    MaeMfe,
    /// PnL calendar heatmap.
    PnlHeatmap,
    /// Liquidity depth heatmap.
    LiquidityHeatmap,
    /// BTC benchmark overlay.
    BenchmarkBtc,
}

impl PanelKind {
    /// Human-readable panel name for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::AiTiltMeter => "AI Tilt Meter",
            PanelKind::MaeMfe => "MAE/MFE",
            PanelKind::PnlHeatmap => "PnL Heatmap",
            PanelKind::LiquidityHeatmap => "Liquidity Heatmap",
            PanelKind::BenchmarkBtc => "BTC Benchmark",
        }
    }
}

/// Overall layout density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDensity {
    Comfortable,
    Compact,
}

impl LayoutDensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutDensity::Comfortable => "comfortable",
            LayoutDensity::Compact => "compact",
        }
    }
}

/// Heatmap color ramp style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapStyle {
    Continuous,
    Discrete,
}

impl HeatmapStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatmapStyle::Continuous => "continuous",
            HeatmapStyle::Discrete => "discrete",
        }
    }
}

/// What the dashboard shell renders for one settings snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Timestamp when the view was derived (Unix milliseconds).
    pub timestamp_ms: i64,
    /// Greeting shown in the header.
    pub greeting: String,
    /// AI coach persona.
    pub coach: AiPersonality,
    /// Layout density.
    pub layout: LayoutDensity,
    /// Heatmap rendering style.
    pub heatmap_style: HeatmapStyle,
    /// Visible panels in render order.
    pub panels: Vec<PanelKind>,
}

impl DashboardView {
    /// Derive the view from a settings snapshot.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut panels = Vec::new();
        if settings.show_ai_tilt_meter {
            panels.push(PanelKind::AiTiltMeter);
        }
        if settings.show_mae_mfe {
            panels.push(PanelKind::MaeMfe);
        }
        if settings.show_pnl_heatmap {
            panels.push(PanelKind::PnlHeatmap);
        }
        if settings.show_liquidity_heatmap {
            panels.push(PanelKind::LiquidityHeatmap);
        }
        if settings.show_benchmark_btc {
            panels.push(PanelKind::BenchmarkBtc);
        }

        Self {
            timestamp_ms: Utc::now().timestamp_millis(),
            greeting: format!("Welcome back, {}", settings.player_name),
            coach: settings.ai_personality,
            layout: if settings.compact_mode {
                LayoutDensity::Compact
            } else {
                LayoutDensity::Comfortable
            },
            heatmap_style: if settings.use_discrete_heatmap {
                HeatmapStyle::Discrete
            } else {
                HeatmapStyle::Continuous
            },
            panels,
        }
    }
}

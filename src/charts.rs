//! Typed chart and layout descriptions for the dashboard.
//!
//! Everything here is derived from a [`DashboardState`] on demand; a renderer
//! only has to draw what it is given.

use serde::Serialize;

use crate::app::{DashboardState, Status};
use crate::domain::{HistoricalData, Hotspot, PredictionOutput, RiskCategory};
use crate::scenario::Scenario;
use crate::transform::{
    category_slices, historical_stats, partition_hotspots, CategorySlice, HIGH_RISK_COLOR,
    MITIGATOR_COLOR,
};

const NBSP3: &str = "\u{a0}\u{a0}\u{a0}";
const MIN_CHART_HEIGHT: u32 = 400;
const ROW_HEIGHT: u32 = 50;
const HISTORICAL_COLOR: &str = "rgba(100, 149, 237, 0.7)";

pub const NO_ANALYSIS_TITLE: &str = "No Analysis Yet";
pub const NO_HOTSPOTS_MESSAGE: &str = "No hotspots identified";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSeries {
    pub name: &'static str,
    /// Category labels, one per bar.
    pub y: Vec<String>,
    /// Impact in days, one per bar.
    pub x: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub text: Vec<String>,
    pub hover_template: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HotspotChart {
    /// Risks first, then mitigators; a group with no members emits no series.
    pub series: Vec<BarSeries>,
    pub x_range: [f64; 2],
    pub x_title: &'static str,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotspotPanel {
    Chart(HotspotChart),
    Empty { message: &'static str },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoricalChart {
    pub title: String,
    pub values: Vec<f64>,
    pub box_color: &'static str,
    /// Dashed marker at the current prediction.
    pub current_line: f64,
    pub current_color: &'static str,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DonutChart {
    pub title: &'static str,
    pub hole: f64,
    pub slices: Vec<CategorySlice>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Kpis {
    pub time_overrun: String,
    pub cost_overrun: String,
    pub confidence: String,
}

/// Everything the results pane shows for one state snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Kpis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspots: Option<HotspotPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical: Option<HistoricalChart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<DonutChart>,
    /// Seed for the what-if editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let empty = Self {
            status: state.status,
            placeholder: None,
            kpis: None,
            hotspots: None,
            historical: None,
            categories: None,
            scenario: None,
        };

        if state.is_loading() {
            return empty;
        }

        let Some(result) = state.result.as_ref() else {
            return Self {
                placeholder: Some(NO_ANALYSIS_TITLE),
                ..empty
            };
        };

        let project_type = state
            .baseline
            .as_ref()
            .map(|b| b.project_type.to_string())
            .unwrap_or_else(|| "Project".to_string());

        Self {
            kpis: Some(kpis(result)),
            hotspots: Some(hotspot_panel(&result.hotspots)),
            historical: historical_chart(
                &result.historical_data,
                result.predicted_time_overrun,
                &project_type,
            ),
            categories: donut_chart(&result.risk_categories),
            scenario: state.baseline.as_ref().map(Scenario::from_baseline),
            ..empty
        }
    }
}

pub fn kpis(result: &PredictionOutput) -> Kpis {
    Kpis {
        time_overrun: format!("+{:.0} Days", result.predicted_time_overrun),
        cost_overrun: format!("+{:.1}%", result.predicted_cost_overrun),
        confidence: format!("{:.1}%", result.confidence_score),
    }
}

pub fn hotspot_panel(hotspots: &[Hotspot]) -> HotspotPanel {
    let groups = partition_hotspots(hotspots);
    if groups.is_empty() {
        return HotspotPanel::Empty {
            message: NO_HOTSPOTS_MESSAGE,
        };
    }

    let mut series = Vec::with_capacity(2);

    if !groups.risks.is_empty() {
        series.push(BarSeries {
            name: "Risks",
            y: groups
                .risks
                .iter()
                .map(|r| format!("{} {NBSP3}", r.hotspot.feature))
                .collect(),
            x: groups.risks.iter().map(|r| r.hotspot.impact).collect(),
            colors: groups.risks.iter().map(|r| r.color).collect(),
            text: groups
                .risks
                .iter()
                .map(|r| format!("<i>{}</i>", r.hotspot.description))
                .collect(),
            hover_template: "<b>%{y}</b><br>Impact: +%{x} days<br>%{text}<extra></extra>",
        });
    }

    if !groups.mitigators.is_empty() {
        series.push(BarSeries {
            name: "Mitigators",
            y: groups
                .mitigators
                .iter()
                .map(|h| format!("{NBSP3} {}", h.feature))
                .collect(),
            x: groups.mitigators.iter().map(|h| h.impact).collect(),
            colors: vec![MITIGATOR_COLOR; groups.mitigators.len()],
            text: groups
                .mitigators
                .iter()
                .map(|h| format!("<i>{}</i>", h.description))
                .collect(),
            hover_template: "<b>%{y}</b><br>Impact: %{x} days<br>%{text}<extra></extra>",
        });
    }

    let rows = u32::try_from(hotspots.len()).unwrap_or(u32::MAX);

    HotspotPanel::Chart(HotspotChart {
        series,
        x_range: [groups.range.0, groups.range.1],
        x_title: "Impact (Days)",
        height: MIN_CHART_HEIGHT.max(rows.saturating_mul(ROW_HEIGHT)),
    })
}

/// `None` when there is no history to compare against.
pub fn historical_chart(
    historical: &HistoricalData,
    current_prediction: f64,
    project_type: &str,
) -> Option<HistoricalChart> {
    let stats = historical_stats(&historical.overruns)?;

    Some(HistoricalChart {
        title: format!("Historical Overrun for {project_type}"),
        values: historical.overruns.clone(),
        box_color: HISTORICAL_COLOR,
        current_line: current_prediction,
        current_color: HIGH_RISK_COLOR,
        annotations: vec![
            Annotation {
                text: format!("Current: {current_prediction:.0} days"),
                y: current_prediction,
            },
            Annotation {
                text: format!("Median: {:.0}", stats.median),
                y: stats.median,
            },
            Annotation {
                text: format!("Max: {:.0}", stats.max),
                y: stats.max,
            },
        ],
    })
}

pub fn donut_chart(categories: &[RiskCategory]) -> Option<DonutChart> {
    if categories.is_empty() {
        return None;
    }

    Some(DonutChart {
        title: "Risk Contribution by Category",
        hole: 0.5,
        slices: category_slices(categories),
    })
}

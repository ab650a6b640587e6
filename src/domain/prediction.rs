//! Prediction response models matching the service's response schema.

use serde::{Deserialize, Serialize};

/// Full response of `POST /predict`. Replaced wholesale on every new prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    /// Days.
    pub predicted_time_overrun: f64,
    /// Percent of budget.
    pub predicted_cost_overrun: f64,
    /// 0-100.
    pub confidence_score: f64,
    pub hotspots: Vec<Hotspot>,
    pub historical_data: HistoricalData,
    pub risk_categories: Vec<RiskCategory>,
}

/// One factor contributing to the predicted overrun.
///
/// A positive `impact` pushes the overrun up (risk), a negative one pulls
/// it down (mitigator).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotspot {
    pub feature: String,
    pub impact: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoricalData {
    pub overruns: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskCategory {
    pub category: String,
    pub percentage: f64,
}

impl PredictionOutput {
    /// Range checks on top of the shape check done by serde.
    pub fn check_ranges(&self) -> Result<(), String> {
        if !(self.predicted_time_overrun >= 0.0) {
            return Err(format!(
                "predictedTimeOverrun must be non-negative, got {}",
                self.predicted_time_overrun
            ));
        }
        if !(0.0..=100.0).contains(&self.confidence_score) {
            return Err(format!(
                "confidenceScore must be within 0-100, got {}",
                self.confidence_score
            ));
        }
        Ok(())
    }
}

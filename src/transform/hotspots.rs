//! Hotspot partitioning and severity colouring.
//!
//! Severity is relative to the worst risk in the same response, never to a
//! global scale, so the same impact can be "high" in one prediction and
//! "low" in another.

use serde::Serialize;

use crate::domain::Hotspot;

pub const HIGH_RISK_COLOR: &str = "rgb(239, 68, 68)";
pub const MEDIUM_RISK_COLOR: &str = "rgb(251, 146, 60)";
pub const LOW_RISK_COLOR: &str = "rgb(252, 211, 77)";
/// Used when there is no positive maximum to compare against.
pub const NEUTRAL_RISK_COLOR: &str = LOW_RISK_COLOR;
pub const MITIGATOR_COLOR: &str = "rgb(34, 197, 94)";

const HIGH_THRESHOLD: f64 = 0.66;
const MEDIUM_THRESHOLD: f64 = 0.33;

const LOWER_PADDING: f64 = 1.1;
// Risk labels render outside their bars, so the positive side gets more room
const UPPER_PADDING: f64 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::High => HIGH_RISK_COLOR,
            Severity::Medium => MEDIUM_RISK_COLOR,
            Severity::Low => LOW_RISK_COLOR,
        }
    }
}

/// Bucket `impact` against the group maximum. `None` when `max_impact` is zero.
pub fn severity(impact: f64, max_impact: f64) -> Option<Severity> {
    if max_impact == 0.0 {
        return None;
    }
    let ratio = impact / max_impact;
    Some(if ratio > HIGH_THRESHOLD {
        Severity::High
    } else if ratio > MEDIUM_THRESHOLD {
        Severity::Medium
    } else {
        Severity::Low
    })
}

pub fn risk_color(impact: f64, max_impact: f64) -> &'static str {
    severity(impact, max_impact)
        .map(Severity::color)
        .unwrap_or(NEUTRAL_RISK_COLOR)
}

/// A time-increasing hotspot with its colour bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskBar {
    pub hotspot: Hotspot,
    pub severity: Option<Severity>,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HotspotGroups {
    /// `impact > 0`, ascending.
    pub risks: Vec<RiskBar>,
    /// `impact < 0`, ascending (most negative first).
    pub mitigators: Vec<Hotspot>,
    /// Neither positive nor negative; never charted.
    pub excluded: Vec<Hotspot>,
    /// Largest risk impact, 0 when there are no risks.
    pub max_risk_impact: f64,
    /// Padded x-axis range `[lower, upper]`.
    pub range: (f64, f64),
}

impl HotspotGroups {
    /// True when no bar would be drawn.
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty() && self.mitigators.is_empty()
    }
}

pub fn partition_hotspots(hotspots: &[Hotspot]) -> HotspotGroups {
    let mut risks = Vec::new();
    let mut mitigators = Vec::new();
    let mut excluded = Vec::new();

    for hotspot in hotspots {
        if hotspot.impact > 0.0 {
            risks.push(hotspot.clone());
        } else if hotspot.impact < 0.0 {
            mitigators.push(hotspot.clone());
        } else {
            excluded.push(hotspot.clone());
        }
    }

    // Stable: equal impacts keep response order
    risks.sort_by(|a, b| a.impact.total_cmp(&b.impact));
    mitigators.sort_by(|a, b| a.impact.total_cmp(&b.impact));

    let max_risk_impact = risks.last().map(|h| h.impact).unwrap_or(0.0);
    let min_mitigator_impact = mitigators.first().map(|h| h.impact).unwrap_or(0.0);

    let range = (
        min_mitigator_impact.min(0.0) * LOWER_PADDING,
        max_risk_impact.max(0.0) * UPPER_PADDING,
    );

    let risks = risks
        .into_iter()
        .map(|hotspot| {
            let severity = severity(hotspot.impact, max_risk_impact);
            RiskBar {
                color: severity.map(Severity::color).unwrap_or(NEUTRAL_RISK_COLOR),
                severity,
                hotspot,
            }
        })
        .collect();

    HotspotGroups {
        risks,
        mitigators,
        excluded,
        max_risk_impact,
        range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotspot(feature: &str, impact: f64) -> Hotspot {
        Hotspot {
            feature: feature.to_string(),
            impact,
            description: format!("{feature} description"),
        }
    }

    #[test]
    fn partitions_by_sign_and_excludes_zero() {
        let input = vec![
            hotspot("Terrain", 15.0),
            hotspot("Vendor", -5.0),
            hotspot("Topic", 0.0),
            hotspot("Type", 3.0),
        ];
        let groups = partition_hotspots(&input);

        let risks: Vec<&str> = groups.risks.iter().map(|r| r.hotspot.feature.as_str()).collect();
        let mitigators: Vec<&str> = groups.mitigators.iter().map(|h| h.feature.as_str()).collect();
        assert_eq!(risks, vec!["Type", "Terrain"]);
        assert_eq!(mitigators, vec!["Vendor"]);
        assert_eq!(groups.excluded, vec![hotspot("Topic", 0.0)]);
        assert_eq!(
            groups.risks.len() + groups.mitigators.len() + groups.excluded.len(),
            input.len()
        );
    }

    #[test]
    fn sorts_each_group_ascending() {
        let groups = partition_hotspots(&[
            hotspot("a", -1.0),
            hotspot("b", -9.0),
            hotspot("c", 7.0),
            hotspot("d", 2.0),
            hotspot("e", -4.0),
        ]);

        let mitigator_impacts: Vec<f64> = groups.mitigators.iter().map(|h| h.impact).collect();
        let risk_impacts: Vec<f64> = groups.risks.iter().map(|r| r.hotspot.impact).collect();
        assert_eq!(mitigator_impacts, vec![-9.0, -4.0, -1.0]);
        assert_eq!(risk_impacts, vec![2.0, 7.0]);
    }

    #[test]
    fn severity_is_relative_to_group_maximum() {
        let groups = partition_hotspots(&[
            hotspot("low", 3.0),
            hotspot("medium", 5.0),
            hotspot("high", 10.0),
        ]);

        let colors: Vec<&str> = groups.risks.iter().map(|r| r.color).collect();
        assert_eq!(colors, vec![LOW_RISK_COLOR, MEDIUM_RISK_COLOR, HIGH_RISK_COLOR]);
        assert_eq!(groups.max_risk_impact, 10.0);
    }

    #[test]
    fn maximum_risk_is_always_high() {
        let singleton = partition_hotspots(&[hotspot("only", 0.4)]);
        assert_eq!(singleton.risks[0].severity, Some(Severity::High));

        let pair = partition_hotspots(&[hotspot("small", 100.0), hotspot("big", 100.5)]);
        assert_eq!(pair.risks[1].severity, Some(Severity::High));
        assert_eq!(pair.risks[0].severity, Some(Severity::High));
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(severity(66.0, 100.0), Some(Severity::Medium));
        assert_eq!(severity(33.0, 100.0), Some(Severity::Low));
        assert_eq!(severity(67.0, 100.0), Some(Severity::High));
        assert_eq!(severity(5.0, 0.0), None);
        assert_eq!(risk_color(5.0, 0.0), NEUTRAL_RISK_COLOR);
    }

    #[test]
    fn range_pads_each_side_differently() {
        let groups = partition_hotspots(&[hotspot("r", 10.0), hotspot("m", -10.0)]);
        let (lower, upper) = groups.range;
        assert!((lower - -11.0).abs() < 1e-9);
        assert!((upper - 15.0).abs() < 1e-9);
    }

    #[test]
    fn range_anchors_at_zero_for_one_sided_data() {
        let only_risks = partition_hotspots(&[hotspot("r", 4.0)]);
        assert_eq!(only_risks.range.0, 0.0);
        assert!((only_risks.range.1 - 6.0).abs() < 1e-9);

        let only_mitigators = partition_hotspots(&[hotspot("m", -2.0)]);
        assert!((only_mitigators.range.0 - -2.2).abs() < 1e-9);
        assert_eq!(only_mitigators.range.1, 0.0);
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let groups = partition_hotspots(&[]);
        assert!(groups.is_empty());
        assert!(groups.risks.is_empty());
        assert!(groups.mitigators.is_empty());
        assert_eq!(groups.range, (0.0, 0.0));
    }

    #[test]
    fn all_zero_input_is_empty_for_charting() {
        let groups = partition_hotspots(&[hotspot("dead", 0.0)]);
        assert!(groups.is_empty());
        assert_eq!(groups.excluded.len(), 1);
    }
}

//! Pure transforms from a prediction response to chart-ready data.
//!
//! Call these fresh on every render; nothing here caches or mutates.

pub mod categories;
pub mod history;
pub mod hotspots;

pub use categories::{category_slices, CategorySlice, CATEGORY_PALETTE};
pub use history::{historical_stats, HistoricalStats};
pub use hotspots::{
    partition_hotspots, risk_color, severity, HotspotGroups, RiskBar, Severity,
    HIGH_RISK_COLOR, LOW_RISK_COLOR, MEDIUM_RISK_COLOR, MITIGATOR_COLOR, NEUTRAL_RISK_COLOR,
};

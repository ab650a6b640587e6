/// Annotation values for the historical overrun distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalStats {
    /// Upper median: sorted element at `n / 2`, never an average of two.
    pub median: f64,
    pub max: f64,
}

/// Median and maximum of the historical sample. `None` for an empty sample;
/// callers skip the historical chart in that case.
pub fn historical_stats(overruns: &[f64]) -> Option<HistoricalStats> {
    if overruns.is_empty() {
        return None;
    }

    let mut sorted = overruns.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(HistoricalStats {
        median: sorted[sorted.len() / 2],
        max: sorted[sorted.len() - 1],
    })
}

use serde::Serialize;

use crate::domain::RiskCategory;

/// Slice colours, cycled when there are more categories than entries.
pub const CATEGORY_PALETTE: [&str; 5] = [
    "rgb(100, 149, 237)",
    "rgb(255, 159, 64)",
    "rgb(153, 102, 255)",
    "rgb(255, 99, 132)",
    "rgb(75, 192, 192)",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

pub fn category_slices(categories: &[RiskCategory]) -> Vec<CategorySlice> {
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| CategorySlice {
            label: c.category.clone(),
            value: c.percentage,
            color: CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()],
        })
        .collect()
}

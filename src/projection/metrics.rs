//! Key-metrics summary consumed by the display surface

use serde::{Deserialize, Serialize};

/// Four-category monthly cost breakdown for the proportion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Fixed monthly mortgage payment
    pub mortgage: f64,

    /// Monthly property tax (annual rate on the purchase price / 12)
    pub property_tax: f64,

    /// Monthly maintenance (annual rate on the purchase price / 12)
    pub maintenance: f64,

    /// Flat monthly insurance premium
    pub insurance: f64,
}

impl CostBreakdown {
    /// Total monthly cost of ownership across all four categories
    pub fn total(&self) -> f64 {
        self.mortgage + self.property_tax + self.maintenance + self.insurance
    }
}

/// Headline figures recomputed independently of the series
///
/// Numerically consistent with the month-1 values of the corresponding
/// series; the engine tests hold that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Fixed monthly mortgage payment
    pub monthly_mortgage: f64,

    /// Total monthly cost of buying (mortgage + tax + maintenance + insurance)
    pub total_monthly_buying_cost: f64,

    /// First-month rent for the comparison path
    pub monthly_rent: f64,

    /// Per-category breakdown of the buying cost
    pub breakdown: CostBreakdown,
}

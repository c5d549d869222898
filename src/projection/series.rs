//! Monthly series output structures for cost projections

use serde::{Deserialize, Serialize};

/// A single month of projected costs for one housing path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Cost paid during this month
    pub monthly_cost: f64,

    /// Running total of costs through this month
    pub cumulative_cost: f64,

    /// Projected home value (0 for the renting path)
    pub property_value: f64,

    /// Home equity: property value less original loan principal
    /// (0 for the renting path)
    pub equity: f64,
}

/// Ordered per-month projection for one housing path
///
/// Computed fresh on every calculation request and never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Monthly rows, indexed 1..=months
    pub rows: Vec<CostRow>,
}

impl MonthlySeries {
    /// Create an empty series sized for the given horizon
    pub fn with_capacity(months: u32) -> Self {
        Self {
            rows: Vec::with_capacity(months as usize),
        }
    }

    /// Append a monthly row
    pub fn add_row(&mut self, row: CostRow) {
        self.rows.push(row);
    }

    /// Number of projected months
    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Cumulative cost at a 1-based month index
    pub fn cumulative_at(&self, month: u32) -> Option<f64> {
        let idx = (month as usize).checked_sub(1)?;
        self.rows.get(idx).map(|r| r.cumulative_cost)
    }

    /// Total cost over the full horizon
    pub fn total_cost(&self) -> f64 {
        self.rows.last().map(|r| r.cumulative_cost).unwrap_or(0.0)
    }
}

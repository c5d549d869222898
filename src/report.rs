//! Chart data tables and file output for the presentation layer
//!
//! Shapes a finished comparison into the payloads an external charting
//! collaborator consumes: the cumulative cost comparison, the monthly cost
//! breakdown, and the equity growth trajectory.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::projection::{ComparisonResult, CostBreakdown};

/// Cumulative cost comparison line chart (buying vs. renting)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparisonChart {
    pub months: Vec<u32>,
    pub buying_cumulative: Vec<f64>,
    pub renting_cumulative: Vec<f64>,
}

/// Equity growth area chart from the buying series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityChart {
    pub months: Vec<u32>,
    pub equity: Vec<f64>,
}

/// Bundle of chart payloads plus the breakeven summary sentence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub cost_comparison: CostComparisonChart,
    pub monthly_breakdown: CostBreakdown,
    pub equity_growth: EquityChart,
    pub breakeven_summary: String,
}

impl ChartData {
    /// Build all chart payloads from a finished comparison
    pub fn from_result(result: &ComparisonResult) -> Self {
        let months: Vec<u32> = result.buying.rows.iter().map(|r| r.month).collect();

        Self {
            cost_comparison: CostComparisonChart {
                months: months.clone(),
                buying_cumulative: result
                    .buying
                    .rows
                    .iter()
                    .map(|r| r.cumulative_cost)
                    .collect(),
                renting_cumulative: result
                    .renting
                    .rows
                    .iter()
                    .map(|r| r.cumulative_cost)
                    .collect(),
            },
            monthly_breakdown: result.metrics.breakdown.clone(),
            equity_growth: EquityChart {
                months,
                equity: result.buying.rows.iter().map(|r| r.equity).collect(),
            },
            breakeven_summary: result.breakeven.to_string(),
        }
    }

    /// Render the bundle as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write both monthly series as a CSV table
pub fn write_series_csv<P: AsRef<Path>>(
    result: &ComparisonResult,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Month,Buying_Monthly,Buying_Cumulative,Property_Value,Equity,Renting_Monthly,Renting_Cumulative"
    )?;

    for (buy, rent) in result.buying.rows.iter().zip(result.renting.rows.iter()) {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            buy.month,
            buy.monthly_cost,
            buy.cumulative_cost,
            buy.property_value,
            buy.equity,
            rent.monthly_cost,
            rent.cumulative_cost,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{
        CalculationInputs, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms,
    };
    use crate::projection::ProjectionEngine;

    fn sample_result() -> ComparisonResult {
        let inputs = CalculationInputs {
            loan: LoanTerms {
                purchase_price: 300_000.0,
                down_payment: 60_000.0,
                annual_rate_pct: 3.5,
                term_years: 30,
            },
            costs: RecurringCosts {
                property_tax_rate_pct: 1.2,
                maintenance_rate_pct: 1.0,
                monthly_insurance: 100.0,
            },
            rental: RentalTerms {
                monthly_rent: 2_000.0,
                annual_increase_pct: 3.0,
            },
            appreciation_rate_pct: 3.0,
            horizon: ProjectionHorizon { years: 2 },
        };

        ProjectionEngine::new(inputs).unwrap().run()
    }

    #[test]
    fn test_chart_columns_cover_every_month() {
        let result = sample_result();
        let charts = ChartData::from_result(&result);

        assert_eq!(charts.cost_comparison.months.len(), 24);
        assert_eq!(charts.cost_comparison.buying_cumulative.len(), 24);
        assert_eq!(charts.cost_comparison.renting_cumulative.len(), 24);
        assert_eq!(charts.equity_growth.equity.len(), 24);
        assert_eq!(charts.cost_comparison.months[0], 1);
        assert_eq!(charts.cost_comparison.months[23], 24);
    }

    #[test]
    fn test_chart_values_come_from_series() {
        let result = sample_result();
        let charts = ChartData::from_result(&result);

        assert_eq!(
            charts.cost_comparison.buying_cumulative[5],
            result.buying.rows[5].cumulative_cost
        );
        assert_eq!(
            charts.cost_comparison.renting_cumulative[5],
            result.renting.rows[5].cumulative_cost
        );
        assert_eq!(charts.equity_growth.equity[5], result.buying.rows[5].equity);
        assert_eq!(charts.monthly_breakdown, result.metrics.breakdown);
    }

    #[test]
    fn test_breakeven_sentence_carried_through() {
        let result = sample_result();
        let charts = ChartData::from_result(&result);

        assert_eq!(charts.breakeven_summary, result.breakeven.to_string());
    }

    #[test]
    fn test_json_rendering() {
        let charts = ChartData::from_result(&sample_result());
        let json = charts.to_json().unwrap();

        assert!(json.contains("cost_comparison"));
        assert!(json.contains("monthly_breakdown"));
        assert!(json.contains("equity_growth"));
        assert!(json.contains("breakeven_summary"));
    }
}

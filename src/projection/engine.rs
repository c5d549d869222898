//! Core projection engine for monthly rent vs. buy cost comparisons

use serde::{Deserialize, Serialize};

use crate::inputs::{CalculationInputs, InputError};

use super::breakeven::{find_breakeven, Breakeven};
use super::metrics::{CostBreakdown, KeyMetrics};
use super::mortgage::monthly_payment;
use super::series::{CostRow, MonthlySeries};

/// Complete outcome of one calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Monthly ownership costs, property value, and equity
    pub buying: MonthlySeries,

    /// Monthly rental costs
    pub renting: MonthlySeries,

    /// Headline metrics for the display surface
    pub metrics: KeyMetrics,

    /// First month buying's cumulative cost undercuts renting's, if any
    pub breakeven: Breakeven,
}

/// Stateless projection engine over a validated input set
///
/// Construction validates every input at the boundary, so a built engine
/// can only produce finite, chartable numbers. Each projection allocates
/// fresh output; nothing is cached or mutated between runs.
pub struct ProjectionEngine {
    inputs: CalculationInputs,
    monthly_mortgage: f64,
}

impl ProjectionEngine {
    /// Build an engine for one input set, validating at the boundary
    pub fn new(inputs: CalculationInputs) -> Result<Self, InputError> {
        inputs.validate()?;
        let monthly_mortgage = monthly_payment(
            inputs.loan.principal(),
            inputs.loan.annual_rate_pct,
            inputs.loan.term_years,
        )?;

        Ok(Self {
            inputs,
            monthly_mortgage,
        })
    }

    /// Run the full comparison: both series, key metrics, and breakeven
    pub fn run(&self) -> ComparisonResult {
        let buying = self.project_buying();
        let renting = self.project_renting();
        let breakeven = find_breakeven(&buying, &renting);

        ComparisonResult {
            metrics: self.key_metrics(),
            buying,
            renting,
            breakeven,
        }
    }

    /// Project monthly ownership costs, property value, and equity
    ///
    /// The mortgage payment is treated as flat across the horizon; the
    /// amortization schedule is not split into interest and principal.
    pub fn project_buying(&self) -> MonthlySeries {
        let months = self.inputs.horizon.months();
        let purchase_price = self.inputs.loan.purchase_price;
        let principal = self.inputs.loan.principal();
        let monthly_cost = self.cost_breakdown().total();
        // Fractional-year exponent: value compounds with (1+r)^(m/12), not
        // in discrete annual steps
        let growth = 1.0 + self.inputs.appreciation_rate_pct / 100.0;

        let mut series = MonthlySeries::with_capacity(months);
        for month in 1..=months {
            let property_value = purchase_price * growth.powf(month as f64 / 12.0);
            series.add_row(CostRow {
                month,
                monthly_cost,
                cumulative_cost: monthly_cost * month as f64,
                property_value,
                // Equity nets the original loan principal only; principal
                // already repaid through the mortgage is not added back
                equity: property_value - principal,
            });
        }

        series
    }

    /// Project monthly rental costs
    ///
    /// Rent grows with the same fractional-year compounding convention as
    /// property value; equity stays at zero.
    pub fn project_renting(&self) -> MonthlySeries {
        let months = self.inputs.horizon.months();
        let rental = &self.inputs.rental;
        let growth = 1.0 + rental.annual_increase_pct / 100.0;

        let mut series = MonthlySeries::with_capacity(months);
        let mut cumulative = 0.0;
        for month in 1..=months {
            let monthly_cost = rental.monthly_rent * growth.powf(month as f64 / 12.0);
            cumulative += monthly_cost;
            series.add_row(CostRow {
                month,
                monthly_cost,
                cumulative_cost: cumulative,
                property_value: 0.0,
                equity: 0.0,
            });
        }

        series
    }

    /// Monthly cost breakdown evaluated once from the per-rate terms
    pub fn cost_breakdown(&self) -> CostBreakdown {
        let purchase_price = self.inputs.loan.purchase_price;
        let costs = &self.inputs.costs;

        CostBreakdown {
            mortgage: self.monthly_mortgage,
            property_tax: purchase_price * costs.property_tax_rate_pct / 100.0 / 12.0,
            maintenance: purchase_price * costs.maintenance_rate_pct / 100.0 / 12.0,
            insurance: costs.monthly_insurance,
        }
    }

    /// Headline metrics, recomputed independently of the series
    pub fn key_metrics(&self) -> KeyMetrics {
        let breakdown = self.cost_breakdown();

        KeyMetrics {
            monthly_mortgage: self.monthly_mortgage,
            total_monthly_buying_cost: breakdown.total(),
            monthly_rent: self.inputs.rental.monthly_rent,
            breakdown,
        }
    }

    /// Fixed monthly mortgage payment for this input set
    pub fn monthly_mortgage(&self) -> f64 {
        self.monthly_mortgage
    }

    /// Borrow the validated inputs
    pub fn inputs(&self) -> &CalculationInputs {
        &self.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms};
    use approx::assert_relative_eq;

    fn reference_inputs() -> CalculationInputs {
        CalculationInputs {
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
            horizon: ProjectionHorizon { years: 10 },
        }
    }

    #[test]
    fn test_series_cover_full_horizon() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let result = engine.run();

        assert_eq!(result.buying.months(), 120);
        assert_eq!(result.renting.months(), 120);
        assert_eq!(result.buying.rows[0].month, 1);
        assert_eq!(result.buying.rows[119].month, 120);
    }

    #[test]
    fn test_buying_cost_is_flat_and_cumulative_is_linear() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let buying = engine.project_buying();

        let monthly = buying.rows[0].monthly_cost;
        assert_relative_eq!(monthly, 1727.7072507411763, epsilon = 1e-9);

        for row in &buying.rows {
            assert_eq!(row.monthly_cost, monthly);
            assert_relative_eq!(
                row.cumulative_cost,
                monthly * row.month as f64,
                epsilon = 1e-9
            );
        }

        // Strictly increasing cumulative cost for a positive monthly cost
        for pair in buying.rows.windows(2) {
            assert!(pair[1].cumulative_cost > pair[0].cumulative_cost);
        }
    }

    #[test]
    fn test_renting_cumulative_is_running_sum() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let renting = engine.project_renting();

        assert_relative_eq!(
            renting.rows[0].monthly_cost,
            2004.9325395446074,
            epsilon = 1e-9
        );

        let mut running = 0.0;
        for row in &renting.rows {
            running += row.monthly_cost;
            assert_relative_eq!(row.cumulative_cost, running, epsilon = 1e-6);
            assert_eq!(row.equity, 0.0);
            assert_eq!(row.property_value, 0.0);
        }

        // Non-decreasing monthly rent for a non-negative increase rate
        for pair in renting.rows.windows(2) {
            assert!(pair[1].monthly_cost >= pair[0].monthly_cost);
        }
    }

    #[test]
    fn test_equity_at_first_month() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let buying = engine.project_buying();

        // 300000 * 1.03^(1/12) - 240000
        assert_relative_eq!(buying.rows[0].equity, 60739.88093169109, epsilon = 1e-6);
    }

    #[test]
    fn test_property_value_at_horizon_end() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let buying = engine.project_buying();

        // 300000 * 1.03^10
        assert_relative_eq!(
            buying.rows[119].property_value,
            403174.9138032367,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_metrics_match_month_one_values() {
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let result = engine.run();

        assert_relative_eq!(
            result.metrics.total_monthly_buying_cost,
            result.buying.rows[0].monthly_cost,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            result.metrics.monthly_mortgage,
            1077.7072507411763,
            epsilon = 1e-9
        );
        assert_eq!(result.metrics.monthly_rent, 2_000.0);
        assert_relative_eq!(result.metrics.breakdown.property_tax, 300.0, epsilon = 1e-12);
        assert_relative_eq!(result.metrics.breakdown.maintenance, 250.0, epsilon = 1e-12);
        assert_eq!(result.metrics.breakdown.insurance, 100.0);
    }

    #[test]
    fn test_reference_scenario_breaks_even_immediately() {
        // Monthly buying cost (~$1727.71) starts below month-1 rent
        // (~$2004.93), so the cumulative difference is negative from the
        // first month
        let engine = ProjectionEngine::new(reference_inputs()).unwrap();
        let result = engine.run();

        assert_eq!(result.breakeven, Breakeven::Month(1));
    }

    #[test]
    fn test_mid_horizon_breakeven() {
        let mut inputs = reference_inputs();
        inputs.rental.monthly_rent = 1_650.0;

        let engine = ProjectionEngine::new(inputs).unwrap();
        let result = engine.run();

        assert_eq!(result.breakeven, Breakeven::Month(37));
    }

    #[test]
    fn test_cheap_flat_rent_never_breaks_even() {
        let mut inputs = reference_inputs();
        inputs.rental.monthly_rent = 500.0;
        inputs.rental.annual_increase_pct = 0.0;
        inputs.horizon.years = 5;

        let engine = ProjectionEngine::new(inputs).unwrap();
        let result = engine.run();

        assert_eq!(result.breakeven, Breakeven::Never);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let first = ProjectionEngine::new(reference_inputs()).unwrap().run();
        let second = ProjectionEngine::new(reference_inputs()).unwrap().run();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_inputs_rejected_at_construction() {
        let mut inputs = reference_inputs();
        inputs.rental.monthly_rent = -1.0;

        assert!(ProjectionEngine::new(inputs).is_err());
    }

    #[test]
    fn test_zero_rate_engine_runs() {
        let mut inputs = reference_inputs();
        inputs.loan.annual_rate_pct = 0.0;

        let engine = ProjectionEngine::new(inputs).unwrap();
        assert_relative_eq!(
            engine.monthly_mortgage(),
            240_000.0 / 360.0,
            epsilon = 1e-12
        );

        let result = engine.run();
        assert!(result.buying.rows.iter().all(|r| r.monthly_cost.is_finite()));
    }
}

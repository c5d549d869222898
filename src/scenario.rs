//! Scenario runner for recomputing comparisons across input variations
//!
//! Owns a base input set and re-runs the full calculation per request, so
//! callers keep all mutable state and the engine stays stateless.

use crate::inputs::{CalculationInputs, InputError};
use crate::projection::{ComparisonResult, ProjectionEngine};

/// Re-runs the full calculation pipeline for a base scenario and variations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(base_inputs);
///
/// // Re-run with different mortgage rates
/// for rate in [3.0, 4.0, 5.0] {
///     let result = runner.run_with(|inputs| inputs.loan.annual_rate_pct = rate)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: CalculationInputs,
}

impl ScenarioRunner {
    /// Create a runner around a base input set
    pub fn new(base: CalculationInputs) -> Self {
        Self { base }
    }

    /// Run the base scenario
    pub fn run(&self) -> Result<ComparisonResult, InputError> {
        ProjectionEngine::new(self.base.clone()).map(|engine| engine.run())
    }

    /// Run the base scenario with one adjustment applied
    ///
    /// Mirrors an interactive input change: the whole pipeline re-evaluates
    /// from scratch on fresh output structures.
    pub fn run_with<F>(&self, adjust: F) -> Result<ComparisonResult, InputError>
    where
        F: FnOnce(&mut CalculationInputs),
    {
        let mut inputs = self.base.clone();
        adjust(&mut inputs);
        ProjectionEngine::new(inputs).map(|engine| engine.run())
    }

    /// Run a list of complete scenarios
    pub fn run_batch(
        &self,
        scenarios: &[CalculationInputs],
    ) -> Vec<Result<ComparisonResult, InputError>> {
        scenarios
            .iter()
            .map(|inputs| ProjectionEngine::new(inputs.clone()).map(|engine| engine.run()))
            .collect()
    }

    /// Borrow the base inputs for inspection
    pub fn base(&self) -> &CalculationInputs {
        &self.base
    }

    /// Mutable access to the base inputs for customization
    pub fn base_mut(&mut self) -> &mut CalculationInputs {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms};
    use crate::projection::Breakeven;

    fn base_inputs() -> CalculationInputs {
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
    fn test_run_with_leaves_base_untouched() {
        let runner = ScenarioRunner::new(base_inputs());

        let adjusted = runner
            .run_with(|inputs| inputs.rental.monthly_rent = 500.0)
            .unwrap();
        assert_eq!(adjusted.metrics.monthly_rent, 500.0);

        // The base scenario still runs with its original rent
        let base = runner.run().unwrap();
        assert_eq!(base.metrics.monthly_rent, 2_000.0);
    }

    #[test]
    fn test_run_with_surfaces_validation_errors() {
        let runner = ScenarioRunner::new(base_inputs());

        let result = runner.run_with(|inputs| inputs.loan.down_payment = 999_999.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new(base_inputs());

        let mut cheap_rent = base_inputs();
        cheap_rent.rental.monthly_rent = 500.0;
        cheap_rent.rental.annual_increase_pct = 0.0;
        cheap_rent.horizon.years = 5;

        let results = runner.run_batch(&[base_inputs(), cheap_rent]);
        assert_eq!(results.len(), 2);

        let base = results[0].as_ref().unwrap();
        assert_eq!(base.breakeven, Breakeven::Month(1));

        let cheap = results[1].as_ref().unwrap();
        assert_eq!(cheap.breakeven, Breakeven::Never);
    }
}

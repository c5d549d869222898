//! Input structures for a rent vs. buy calculation request

use serde::{Deserialize, Serialize};

/// Mortgage loan terms for the purchase path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Purchase price of the home
    pub purchase_price: f64,

    /// Up-front down payment, between 0 and the purchase price
    pub down_payment: f64,

    /// Annual mortgage rate as a percentage (3.5 = 3.5%)
    pub annual_rate_pct: f64,

    /// Mortgage term in whole years
    pub term_years: u32,
}

impl LoanTerms {
    /// Amount financed: purchase price less down payment
    pub fn principal(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// Total number of monthly payments over the term
    pub fn num_payments(&self) -> u32 {
        self.term_years * 12
    }
}

/// Recurring ownership costs outside the mortgage payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringCosts {
    /// Annual property tax rate as a percentage of the purchase price
    pub property_tax_rate_pct: f64,

    /// Annual maintenance cost as a percentage of the purchase price
    pub maintenance_rate_pct: f64,

    /// Flat monthly homeowner's insurance premium
    pub monthly_insurance: f64,
}

/// Rental terms for the renting path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalTerms {
    /// Rent for the first month
    pub monthly_rent: f64,

    /// Annual rent increase as a percentage
    pub annual_increase_pct: f64,
}

/// Projection horizon in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionHorizon {
    pub years: u32,
}

impl ProjectionHorizon {
    /// Number of projected months
    pub fn months(&self) -> u32 {
        self.years * 12
    }
}

/// Complete input set for one calculation request
///
/// Immutable once built; the engine reads it and writes only freshly
/// allocated output series. Callers own all mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Mortgage terms
    pub loan: LoanTerms,

    /// Recurring ownership costs
    pub costs: RecurringCosts,

    /// Rental comparison terms
    pub rental: RentalTerms,

    /// Annual home appreciation rate as a percentage
    pub appreciation_rate_pct: f64,

    /// Comparison horizon
    pub horizon: ProjectionHorizon,
}

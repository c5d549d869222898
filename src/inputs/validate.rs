//! Boundary validation for calculation inputs
//!
//! Every numeric input is checked against its documented domain before any
//! calculation runs, so no NaN or undefined value can reach the projected
//! series or the charts downstream.

use thiserror::Error;

use super::data::CalculationInputs;

/// A numeric input outside its documented domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Value must be zero or greater
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Value must be a real, finite number
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Down payment larger than the price being financed
    #[error("down payment ({down_payment}) cannot exceed purchase price ({purchase_price})")]
    DownPaymentExceedsPrice {
        down_payment: f64,
        purchase_price: f64,
    },

    /// Term or horizon shorter than one year
    #[error("{field} must be at least 1 year, got {value}")]
    BelowOneYear { field: &'static str, value: u32 },
}

/// Check that a dollar amount or rate is finite and non-negative
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

impl CalculationInputs {
    /// Validate every field against its documented domain
    pub fn validate(&self) -> Result<(), InputError> {
        check_non_negative("purchase_price", self.loan.purchase_price)?;
        check_non_negative("down_payment", self.loan.down_payment)?;
        check_non_negative("annual_rate_pct", self.loan.annual_rate_pct)?;
        if self.loan.down_payment > self.loan.purchase_price {
            return Err(InputError::DownPaymentExceedsPrice {
                down_payment: self.loan.down_payment,
                purchase_price: self.loan.purchase_price,
            });
        }
        if self.loan.term_years < 1 {
            return Err(InputError::BelowOneYear {
                field: "term_years",
                value: self.loan.term_years,
            });
        }

        check_non_negative("property_tax_rate_pct", self.costs.property_tax_rate_pct)?;
        check_non_negative("maintenance_rate_pct", self.costs.maintenance_rate_pct)?;
        check_non_negative("monthly_insurance", self.costs.monthly_insurance)?;

        check_non_negative("monthly_rent", self.rental.monthly_rent)?;
        check_non_negative("annual_increase_pct", self.rental.annual_increase_pct)?;

        check_non_negative("appreciation_rate_pct", self.appreciation_rate_pct)?;

        if self.horizon.years < 1 {
            return Err(InputError::BelowOneYear {
                field: "horizon_years",
                value: self.horizon.years,
            });
        }

        Ok(())
    }
}

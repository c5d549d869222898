//! Fixed monthly mortgage payment calculation

use crate::inputs::{check_non_negative, InputError};

/// Calculate the fixed monthly payment for an amortizing loan
///
/// Standard annuity formula: with monthly rate r = annual_rate_pct/12/100
/// and n = term_years * 12 payments,
/// `payment = principal * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// At a zero rate the denominator vanishes, so the payment takes the
/// straight-line limit `principal / n` instead of dividing by zero.
pub fn monthly_payment(
    principal: f64,
    annual_rate_pct: f64,
    term_years: u32,
) -> Result<f64, InputError> {
    check_non_negative("principal", principal)?;
    check_non_negative("annual_rate_pct", annual_rate_pct)?;
    if term_years < 1 {
        return Err(InputError::BelowOneYear {
            field: "term_years",
            value: term_years,
        });
    }

    let num_payments = term_years * 12;
    if annual_rate_pct == 0.0 {
        return Ok(principal / num_payments as f64);
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let growth = (1.0 + monthly_rate).powi(num_payments as i32);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

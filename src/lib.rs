//! Rent vs. Buy Calculator - comparison engine for home purchase vs. rental costs
//!
//! This library provides:
//! - Fixed monthly mortgage payment calculation with an explicit zero-rate limit
//! - Buying and renting cost projections as monthly series
//! - Breakeven analysis between the two cumulative cost curves
//! - Key-metrics summary and chart-ready data tables
//! - Batch scenario running for sensitivity sweeps

pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{
    CalculationInputs, InputError, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms,
};
pub use projection::{Breakeven, ComparisonResult, KeyMetrics, MonthlySeries, ProjectionEngine};
pub use scenario::ScenarioRunner;

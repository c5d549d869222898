//! Calculation inputs: immutable request structs, boundary validation, and
//! CSV scenario loading

mod data;
mod validate;
pub mod loader;

pub use data::{CalculationInputs, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
pub use validate::InputError;

pub(crate) use validate::check_non_negative;

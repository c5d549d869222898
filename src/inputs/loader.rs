//! Load calculation scenarios from a CSV file
//!
//! One row is one complete input set; rows are validated on conversion so
//! downstream batch runs never see an out-of-domain scenario.

use csv::Reader;
use log::info;
use std::error::Error;
use std::path::Path;

use super::data::{
    CalculationInputs, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms,
};

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "MortgageRatePct")]
    mortgage_rate_pct: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
    #[serde(rename = "PropertyTaxRatePct")]
    property_tax_rate_pct: f64,
    #[serde(rename = "MaintenanceRatePct")]
    maintenance_rate_pct: f64,
    #[serde(rename = "MonthlyInsurance")]
    monthly_insurance: f64,
    #[serde(rename = "AppreciationRatePct")]
    appreciation_rate_pct: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "RentIncreasePct")]
    rent_increase_pct: f64,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario, Box<dyn Error>> {
        let inputs = CalculationInputs {
            loan: LoanTerms {
                purchase_price: self.purchase_price,
                down_payment: self.down_payment,
                annual_rate_pct: self.mortgage_rate_pct,
                term_years: self.term_years,
            },
            costs: RecurringCosts {
                property_tax_rate_pct: self.property_tax_rate_pct,
                maintenance_rate_pct: self.maintenance_rate_pct,
                monthly_insurance: self.monthly_insurance,
            },
            rental: RentalTerms {
                monthly_rent: self.monthly_rent,
                annual_increase_pct: self.rent_increase_pct,
            },
            appreciation_rate_pct: self.appreciation_rate_pct,
            horizon: ProjectionHorizon {
                years: self.horizon_years,
            },
        };

        if let Err(e) = inputs.validate() {
            return Err(format!("scenario '{}': {}", self.scenario, e).into());
        }

        Ok(NamedScenario {
            name: self.scenario,
            inputs,
        })
    }
}

/// A scenario label paired with its validated inputs
#[derive(Debug, Clone)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: CalculationInputs,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Scenario,PurchasePrice,DownPayment,MortgageRatePct,TermYears,\
PropertyTaxRatePct,MaintenanceRatePct,MonthlyInsurance,AppreciationRatePct,\
MonthlyRent,RentIncreasePct,HorizonYears";

    #[test]
    fn test_load_scenarios_from_reader() {
        let csv = format!(
            "{}\nbase,300000,60000,3.5,30,1.2,1.0,100,3.0,2000,3.0,10\n\
cheap_rent,300000,60000,3.5,30,1.2,1.0,100,3.0,500,0.0,5\n",
            HEADER
        );

        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let base = &scenarios[0];
        assert_eq!(base.name, "base");
        assert_eq!(base.inputs.loan.purchase_price, 300_000.0);
        assert_eq!(base.inputs.loan.term_years, 30);
        assert_eq!(base.inputs.horizon.years, 10);

        let cheap = &scenarios[1];
        assert_eq!(cheap.name, "cheap_rent");
        assert_eq!(cheap.inputs.rental.monthly_rent, 500.0);
        assert_eq!(cheap.inputs.rental.annual_increase_pct, 0.0);
    }

    #[test]
    fn test_out_of_domain_row_rejected() {
        let csv = format!(
            "{}\nbad,300000,400000,3.5,30,1.2,1.0,100,3.0,2000,3.0,10\n",
            HEADER
        );

        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad"), "unexpected message: {}", message);
        assert!(
            message.contains("down payment"),
            "unexpected message: {}",
            message
        );
    }
}

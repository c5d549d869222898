//! Rent vs. Buy Calculator CLI
//!
//! Runs a single comparison from command-line inputs, prints the key
//! metrics and a monthly cost table, and writes the full series to CSV.

use anyhow::Context;
use clap::Parser;
use rentbuy_calculator::{
    inputs::{CalculationInputs, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms},
    projection::ProjectionEngine,
    report::{self, ChartData},
};
use std::path::PathBuf;

/// Compare the cost of buying a home against renting over a time horizon
#[derive(Debug, Parser)]
#[command(name = "rentbuy", version)]
struct Args {
    /// Purchase price of the home ($)
    #[arg(long, default_value_t = 300_000.0)]
    purchase_price: f64,

    /// Down payment ($)
    #[arg(long, default_value_t = 60_000.0)]
    down_payment: f64,

    /// Annual mortgage rate (%)
    #[arg(long, default_value_t = 3.5)]
    mortgage_rate: f64,

    /// Mortgage term (years)
    #[arg(long, default_value_t = 30)]
    term_years: u32,

    /// Monthly rent ($)
    #[arg(long, default_value_t = 2_000.0)]
    monthly_rent: f64,

    /// Annual rent increase (%)
    #[arg(long, default_value_t = 3.0)]
    rent_increase: f64,

    /// Annual property tax rate (%)
    #[arg(long, default_value_t = 1.2)]
    property_tax_rate: f64,

    /// Annual maintenance cost (%)
    #[arg(long, default_value_t = 1.0)]
    maintenance_rate: f64,

    /// Monthly insurance ($)
    #[arg(long, default_value_t = 100.0)]
    monthly_insurance: f64,

    /// Annual home appreciation (%)
    #[arg(long, default_value_t = 3.0)]
    appreciation_rate: f64,

    /// Time horizon (years)
    #[arg(long, default_value_t = 10)]
    horizon_years: u32,

    /// Output CSV path for the monthly series
    #[arg(long, default_value = "comparison_output.csv")]
    output: PathBuf,

    /// Also write chart payloads as JSON to this path
    #[arg(long)]
    chart_json: Option<PathBuf>,
}

impl Args {
    fn to_inputs(&self) -> CalculationInputs {
        CalculationInputs {
            loan: LoanTerms {
                purchase_price: self.purchase_price,
                down_payment: self.down_payment,
                annual_rate_pct: self.mortgage_rate,
                term_years: self.term_years,
            },
            costs: RecurringCosts {
                property_tax_rate_pct: self.property_tax_rate,
                maintenance_rate_pct: self.maintenance_rate,
                monthly_insurance: self.monthly_insurance,
            },
            rental: RentalTerms {
                monthly_rent: self.monthly_rent,
                annual_increase_pct: self.rent_increase,
            },
            appreciation_rate_pct: self.appreciation_rate,
            horizon: ProjectionHorizon {
                years: self.horizon_years,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let inputs = args.to_inputs();

    println!("Rent vs. Buy Calculator v0.1.0");
    println!("==============================\n");

    let engine = ProjectionEngine::new(inputs).context("invalid input")?;
    let result = engine.run();

    println!("Key Metrics:");
    println!(
        "  Monthly Mortgage Payment:    ${:>12.2}",
        result.metrics.monthly_mortgage
    );
    println!(
        "  Total Monthly Cost (Buying): ${:>12.2}",
        result.metrics.total_monthly_buying_cost
    );
    println!(
        "  Monthly Rent:                ${:>12.2}",
        result.metrics.monthly_rent
    );
    println!();

    println!("Monthly Breakdown (Buying):");
    println!("  Mortgage:     ${:>12.2}", result.metrics.breakdown.mortgage);
    println!(
        "  Property Tax: ${:>12.2}",
        result.metrics.breakdown.property_tax
    );
    println!(
        "  Maintenance:  ${:>12.2}",
        result.metrics.breakdown.maintenance
    );
    println!(
        "  Insurance:    ${:>12.2}",
        result.metrics.breakdown.insurance
    );
    println!();

    // Print first 24 months to console
    println!("Projection ({} months):", result.buying.months());
    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Month", "Buy Monthly", "Buy Cumul", "Rent Cumul", "Prop Value", "Equity"
    );
    println!("{}", "-".repeat(80));

    for (buy, rent) in result
        .buying
        .rows
        .iter()
        .zip(result.renting.rows.iter())
        .take(24)
    {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            buy.month,
            buy.monthly_cost,
            buy.cumulative_cost,
            rent.cumulative_cost,
            buy.property_value,
            buy.equity,
        );
    }

    if result.buying.months() > 24 {
        println!("... ({} more months)", result.buying.months() - 24);
    }

    println!("\n{}", result.breakeven);

    report::write_series_csv(&result, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("\nFull series written to: {}", args.output.display());

    if let Some(path) = &args.chart_json {
        let charts = ChartData::from_result(&result);
        std::fs::write(path, charts.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Chart data written to: {}", path.display());
    }

    Ok(())
}

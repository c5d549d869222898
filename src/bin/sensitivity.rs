//! Sweep mortgage rate and rent growth over a grid from the base scenario
//!
//! Writes per-cell breakeven months and horizon cost totals for comparison

use log::info;
use rayon::prelude::*;
use rentbuy_calculator::{
    inputs::{CalculationInputs, LoanTerms, ProjectionHorizon, RecurringCosts, RentalTerms},
    projection::ProjectionEngine,
};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// One cell of the sweep grid
#[derive(Debug, Clone)]
struct GridCell {
    mortgage_rate_pct: f64,
    rent_increase_pct: f64,
    breakeven_month: Option<u32>,
    buying_total: f64,
    renting_total: f64,
}

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

fn main() {
    env_logger::init();

    let start = Instant::now();
    let base = base_inputs();

    // Mortgage rate 2.0%..=8.0% in 0.25% steps, rent growth 0%..=5% in 0.5% steps
    let rates: Vec<f64> = (8..=32).map(|step| step as f64 * 0.25).collect();
    let growths: Vec<f64> = (0..=10).map(|step| step as f64 * 0.5).collect();

    let cells: Vec<(f64, f64)> = rates
        .iter()
        .flat_map(|&rate| growths.iter().map(move |&growth| (rate, growth)))
        .collect();

    info!("sweeping {} grid cells", cells.len());

    let results: Vec<GridCell> = cells
        .par_iter()
        .map(|&(rate, growth)| {
            let mut inputs = base.clone();
            inputs.loan.annual_rate_pct = rate;
            inputs.rental.annual_increase_pct = growth;

            // Grid values stay inside the validated domain
            let engine = ProjectionEngine::new(inputs).expect("grid inputs are within domain");
            let result = engine.run();

            GridCell {
                mortgage_rate_pct: rate,
                rent_increase_pct: growth,
                breakeven_month: result.breakeven.month(),
                buying_total: result.buying.total_cost(),
                renting_total: result.renting.total_cost(),
            }
        })
        .collect();

    let output_path = "sensitivity_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "MortgageRatePct,RentIncreasePct,BreakevenMonth,BuyingTotal,RentingTotal"
    )
    .unwrap();

    for cell in &results {
        writeln!(
            file,
            "{:.2},{:.2},{},{:.2},{:.2}",
            cell.mortgage_rate_pct,
            cell.rent_increase_pct,
            cell.breakeven_month
                .map(|m| m.to_string())
                .unwrap_or_else(|| "never".to_string()),
            cell.buying_total,
            cell.renting_total,
        )
        .unwrap();
    }

    println!("Swept {} cells in {:?}", results.len(), start.elapsed());
    println!("Output written to {}", output_path);

    // Print corner cells for a quick sanity read
    let summary: Vec<&GridCell> = results
        .iter()
        .filter(|c| {
            (c.mortgage_rate_pct == 2.0 || c.mortgage_rate_pct == 8.0)
                && (c.rent_increase_pct == 0.0 || c.rent_increase_pct == 5.0)
        })
        .collect();

    println!("\nCorner cells:");
    for cell in summary {
        println!(
            "  rate={:.2}% growth={:.2}%: breakeven={:?}, buy_total=${:.0}, rent_total=${:.0}",
            cell.mortgage_rate_pct,
            cell.rent_increase_pct,
            cell.breakeven_month,
            cell.buying_total,
            cell.renting_total,
        );
    }
}

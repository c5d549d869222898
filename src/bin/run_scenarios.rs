//! Run every scenario from a CSV file and summarize each outcome
//!
//! Usage: run_scenarios [scenarios.csv]

use rayon::prelude::*;
use rentbuy_calculator::{
    inputs::{load_scenarios, NamedScenario},
    projection::{ComparisonResult, ProjectionEngine},
};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scenarios.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", path);

    let scenarios = load_scenarios(&path).expect("Failed to load scenarios");
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    // Loader already validated every row, so engine construction cannot fail
    let results: Vec<(&NamedScenario, ComparisonResult)> = scenarios
        .par_iter()
        .map(|scenario| {
            let engine = ProjectionEngine::new(scenario.inputs.clone())
                .expect("loaded scenarios are validated");
            (scenario, engine.run())
        })
        .collect();

    println!(
        "\n{:<20} {:>12} {:>14} {:>14} {:>10}",
        "Scenario", "Mortgage", "Buy Total", "Rent Total", "Breakeven"
    );
    println!("{}", "-".repeat(75));

    for (scenario, result) in &results {
        println!(
            "{:<20} {:>12.2} {:>14.2} {:>14.2} {:>10}",
            scenario.name,
            result.metrics.monthly_mortgage,
            result.buying.total_cost(),
            result.renting.total_cost(),
            result
                .breakeven
                .month()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "never".to_string()),
        );
    }

    let output_path = "scenario_summary.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Scenario,MonthlyMortgage,TotalMonthlyBuyingCost,MonthlyRent,BuyingTotal,RentingTotal,BreakevenMonth"
    )
    .unwrap();

    for (scenario, result) in &results {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            scenario.name,
            result.metrics.monthly_mortgage,
            result.metrics.total_monthly_buying_cost,
            result.metrics.monthly_rent,
            result.buying.total_cost(),
            result.renting.total_cost(),
            result
                .breakeven
                .month()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "never".to_string()),
        )
        .unwrap();
    }

    println!("\nSummary written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());
}

//! Rentlab CLI — render rental statements from session files.
//!
//! Commands:
//! - `statement` — build a customer from a TOML session file and print the
//!   plain, HTML, or JSON-summary view
//! - `categories` — list the price categories with sample charges

mod session;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rentlab_core::domain::Customer;
use rentlab_core::pricing::{strategy_for, PriceCategory};
use session::Session;

#[derive(Parser)]
#[command(name = "rentlab", about = "Rentlab CLI — rental statement renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a statement from a TOML session file.
    Statement {
        /// Path to the session file.
        file: PathBuf,

        /// Render the HTML statement instead of plain text.
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print a JSON summary instead of a statement.
        #[arg(long)]
        json: bool,
    },
    /// List the price categories with charges for sample durations.
    Categories,
}

/// One line of the JSON summary.
#[derive(Serialize)]
struct RentalSummary {
    title: String,
    category: PriceCategory,
    days: i64,
    charge: String,
    points: u64,
}

/// JSON summary of a whole session.
#[derive(Serialize)]
struct StatementSummary<'a> {
    customer: &'a str,
    rentals: Vec<RentalSummary>,
    total_charge: String,
    total_points: u64,
}

impl<'a> StatementSummary<'a> {
    fn of(customer: &'a Customer) -> Self {
        let rentals = customer
            .rentals()
            .iter()
            .map(|rental| RentalSummary {
                title: rental.movie().title().to_string(),
                category: rental.movie().category(),
                days: rental.days_rented(),
                charge: rental.charge().to_string(),
                points: rental.points(),
            })
            .collect();
        Self {
            customer: customer.name(),
            rentals,
            total_charge: customer.total_charge().to_string(),
            total_points: customer.total_points(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Statement { file, html, json } => {
            let input = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let customer = Session::from_toml(&input)?.build()?;
            if json {
                let summary = StatementSummary::of(&customer);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if html {
                println!("{}", customer.html_statement());
            } else {
                println!("{}", customer.statement());
            }
        }
        Commands::Categories => {
            println!(
                "{:<12} {:<16} {:>7} {:>7} {:>7}  points (1 / 5 days)",
                "category", "strategy", "1 day", "3 days", "7 days"
            );
            for category in PriceCategory::ALL {
                let strategy = strategy_for(category);
                println!(
                    "{:<12} {:<16} {:>7} {:>7} {:>7}  {} / {}",
                    category.as_str(),
                    strategy.name(),
                    strategy.charge(1).to_string(),
                    strategy.charge(3).to_string(),
                    strategy.charge(7).to_string(),
                    strategy.points(1),
                    strategy.points(5),
                );
            }
        }
    }
    Ok(())
}

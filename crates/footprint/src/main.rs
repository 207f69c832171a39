use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use footprint_api::AppState;
use footprint_core::config::AppConfig;
use footprint_core::{compute_with, EmissionFactors, FootprintResult, RawInput};
use footprint_repository::{seed, InMemoryRepository};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Carbon footprint calculator and API server", long_about = None)]
struct Cli {
    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a monthly footprint from command-line values or an input file
    Calculate(CalculateArgs),
    /// Print the active emission-factor table
    Factors(FactorsArgs),
    /// Start the footprint API server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
struct CalculateArgs {
    /// JSON or TOML file with the raw inputs; flags override its values
    #[arg(long)]
    input: Option<PathBuf>,
    /// TOML file overriding emission factors
    #[arg(long)]
    factors: Option<PathBuf>,
    /// Electricity, kWh per month
    #[arg(long, allow_negative_numbers = true)]
    energy_kwh: Option<f64>,
    /// Natural gas, therms per month
    #[arg(long, allow_negative_numbers = true)]
    gas_therms: Option<f64>,
    /// Car miles per week
    #[arg(long, allow_negative_numbers = true)]
    transport_car: Option<f64>,
    /// Bus miles per week
    #[arg(long, allow_negative_numbers = true)]
    transport_bus: Option<f64>,
    /// Train miles per week
    #[arg(long, allow_negative_numbers = true)]
    transport_train: Option<f64>,
    /// Flight miles per month
    #[arg(long, allow_negative_numbers = true)]
    transport_flight: Option<f64>,
    /// dietOmnivore, dietVegetarian or dietVegan
    #[arg(long)]
    diet: Option<String>,
    /// People in the household
    #[arg(long, allow_negative_numbers = true)]
    waste_people: Option<i64>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl CalculateArgs {
    fn to_input(&self) -> Result<RawInput> {
        let base = match &self.input {
            Some(path) => RawInput::from_path(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?,
            None => RawInput::default(),
        };
        Ok(self.overlay(base))
    }

    fn overlay(&self, base: RawInput) -> RawInput {
        RawInput {
            energy_kwh: self.energy_kwh.or(base.energy_kwh),
            gas_therms: self.gas_therms.or(base.gas_therms),
            transport_car: self.transport_car.or(base.transport_car),
            transport_bus: self.transport_bus.or(base.transport_bus),
            transport_train: self.transport_train.or(base.transport_train),
            transport_flight: self.transport_flight.or(base.transport_flight),
            diet: self.diet.clone().or(base.diet),
            waste_people: self.waste_people.or(base.waste_people),
        }
    }
}

#[derive(Args, Debug, Default)]
struct FactorsArgs {
    /// TOML file overriding emission factors
    #[arg(long)]
    factors: Option<PathBuf>,
    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Address to listen on (defaults to FOOTPRINT_BIND_ADDR or 0.0.0.0:3000)
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// TOML file overriding emission factors (defaults to FOOTPRINT_FACTORS_PATH)
    #[arg(long)]
    factors: Option<PathBuf>,
    /// Seed demo history for user_1
    #[arg(long)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.pretty);

    match cli.command {
        Command::Calculate(args) => handle_calculate(args),
        Command::Factors(args) => handle_factors(args),
        Command::Serve(args) => handle_serve(args).await,
    }
}

fn init_tracing(pretty: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if pretty {
        builder.init();
    } else {
        builder.json().init();
    }
}

fn load_factors(path: Option<&Path>) -> Result<EmissionFactors> {
    match path {
        Some(path) => EmissionFactors::from_toml_file(path)
            .with_context(|| format!("failed to load emission factors from {}", path.display())),
        None => Ok(EmissionFactors::default()),
    }
}

fn handle_calculate(args: CalculateArgs) -> Result<()> {
    let factors = load_factors(args.factors.as_deref())?;
    let input = args.to_input()?;

    if input.diet.as_deref().is_some_and(|d| footprint_core::Diet::from_key(d).is_none()) {
        warn!(diet = ?input.diet, "Unrecognized diet key; diet will count as zero");
    }

    let result = compute_with(input, &factors);
    info!(total = result.total_footprint, "Footprint calculated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", breakdown_table(&result));
        println!("Total: {:.2} kg CO2e / month", result.total_footprint);
    }
    Ok(())
}

fn breakdown_table(result: &FootprintResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "kg CO2e / month", "Share"]);
    for ((category, value), (_, share)) in result
        .breakdown
        .entries()
        .into_iter()
        .zip(result.breakdown.shares())
    {
        table.add_row(vec![
            category.label().to_string(),
            format!("{value:.2}"),
            format!("{:.1}%", share * 100.0),
        ]);
    }
    table
}

fn handle_factors(args: FactorsArgs) -> Result<()> {
    let factors = load_factors(args.factors.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&factors)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Factor", "Value", "Unit"]);
    for (key, value, unit) in factors.entries() {
        table.add_row(vec![key.to_string(), value.to_string(), unit.to_string()]);
    }
    println!("{table}");
    Ok(())
}

async fn handle_serve(args: ServeArgs) -> Result<()> {
    let config = AppConfig::from_env().context("invalid server configuration")?;

    let bind_addr = args.bind.unwrap_or(config.bind_addr);
    let factors = match args.factors.as_deref() {
        Some(path) => load_factors(Some(path))?,
        None => config
            .load_factors()
            .context("failed to load emission factors from FOOTPRINT_FACTORS_PATH")?,
    };

    let repository = Arc::new(InMemoryRepository::new());
    if args.seed_demo || config.seed_demo {
        seed::seed_demo(&repository)
            .await
            .context("failed to seed demo history")?;
    }

    info!(%bind_addr, "Starting footprint API server");
    footprint_api::serve(bind_addr, AppState::new(repository, factors)).await
}

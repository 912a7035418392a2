//! Truck loading planner CLI

mod parser;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use parser::ManifestParser;
use report::PlanReport;
use std::path::PathBuf;
use truck_loader::planner::validate_request;
use truck_loader::{check_capacity, Config, LoadingPlanner, Solver};

#[derive(Parser)]
#[command(name = "truck-loader")]
#[command(about = "Plans step-by-step loading instructions for crates in a truck")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a loading plan for a manifest
    Plan {
        /// Path to the JSON manifest
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Also write the plan as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Time limit in seconds (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        time_limit: u64,

        /// Scan candidate positions in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Validate a manifest and check total volume against the truck
    Check {
        /// Path to the JSON manifest
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable table
    Table,
    /// JSON with camelCase instruction fields
    Json,
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            file,
            format,
            output,
            time_limit,
            parallel,
        } => {
            let manifest = ManifestParser::new().parse_file(&file)?;
            log::info!(
                "Planning {} crates from {}",
                manifest.crates.len(),
                file.display()
            );

            let config = Config::new()
                .with_time_limit(time_limit.saturating_mul(1000))
                .with_parallel_scan(parallel);
            let planner = LoadingPlanner::new(config);
            let plan = planner.solve(&manifest.truck, &manifest.crates)?;

            let report = PlanReport::new(&plan);
            match format {
                Format::Table => report.print_summary(),
                Format::Json => println!("{}", report.to_json()?),
            }

            if let Some(path) = output {
                report.save_json(&path)?;
                eprintln!("Plan saved to: {}", path.display());
            }
        }

        Commands::Check { file } => {
            let manifest = ManifestParser::new().parse_file(&file)?;
            validate_request(&manifest.truck, &manifest.crates)?;

            let check = check_capacity(&manifest.truck, &manifest.crates)?;
            println!("Truck volume: {}", check.truck_volume);
            println!("Crate volume: {}", check.crate_volume);
            println!(
                "Capacity OK ({} spare); placement is not guaranteed",
                check.spare_volume().unwrap_or(0)
            );
        }
    }

    Ok(())
}

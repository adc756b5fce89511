use anyhow::{Context, Result};
use chrono::{Duration, Timelike};
use clap::Parser;
use fishcast_core::{logger::SnapshotLogger, simulation::builder::SimulationBuilder};

mod config;
mod report;

/// Scores fish activity for a water body from a weather-history scenario.
#[derive(Parser)]
#[command(name = "fishcast", version)]
struct Cli {
    /// Path to a scenario YAML file.
    scenario: String,

    /// Print the snapshot as JSON instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Append snapshots to this CSV file.
    #[arg(long)]
    log: Option<String>,

    /// Score every hour of the observation day instead of a single moment.
    #[arg(long)]
    sweep: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario = config::Scenario::load(&cli.scenario)?;
    println!("--- Fishcast: scenario '{}' ---", scenario.name);

    let base_time = scenario
        .observation_time
        .unwrap_or(scenario.current_weather.timestamp);

    let observation_times = if cli.sweep {
        let midnight = base_time
            .with_hour(0)
            .and_then(|t| t.with_minute(0))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .context("Failed to truncate observation time to midnight")?;
        (0..24).map(|h| midnight + Duration::hours(h)).collect()
    } else {
        vec![base_time]
    };

    let mut logger = match &cli.log {
        Some(path) => {
            let logger = SnapshotLogger::new(path)
                .with_context(|| format!("Failed to create log file '{}'", path))?;
            Some(logger)
        }
        None => None,
    };

    // The engine is pure and stateless, so a sweep is just repeated
    // invocations with a different observation time.
    for at in observation_times {
        let mut builder = SimulationBuilder::new()
            .with_current_weather(scenario.current_weather.clone())
            .with_history(scenario.history.clone())
            .with_morphology(scenario.morphology.clone())
            .with_observation_time(at);
        if let Some(hints) = scenario.flow_hints {
            builder = builder.with_flow_hints(hints);
        }

        let snapshot = builder.build()?.run()?;

        if cli.json {
            report::print_json(&snapshot)?;
        } else {
            report::print_summary(&scenario.name, &snapshot);
        }
        if let Some(logger) = &mut logger {
            logger.log_snapshot(&snapshot)?;
        }
    }

    println!("\nDone.");
    Ok(())
}

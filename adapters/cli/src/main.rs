#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a worm from scenario files.

mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use worms_facade::Facade;

use crate::{report::Inspection, scenario::Scenario};

/// Runs worm scenarios and inspects worm physics.
#[derive(Debug, Parser)]
#[command(name = "worms", version, about)]
struct Cli {
    /// Prints the final worm state as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Applies every action of a TOML scenario to its worm.
    Run {
        /// Path to the scenario file.
        scenario: PathBuf,
    },
    /// Reports mass, capacity and jump trajectory of a fresh worm.
    Inspect {
        /// Name of the worm.
        #[arg(long)]
        name: String,
        /// Radius in metres.
        #[arg(long)]
        radius: f64,
        /// Facing angle in radians.
        #[arg(long, allow_negative_numbers = true)]
        direction: f64,
        /// Horizontal coordinate in metres.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        /// Vertical coordinate in metres.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
    },
}

/// Entry point for the worms command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let facade = Facade;
    match cli.mode {
        Mode::Run { scenario } => run(&facade, &Scenario::from_path(scenario)?, cli.json),
        Mode::Inspect {
            name,
            radius,
            direction,
            x,
            y,
        } => {
            let worm = facade
                .create_worm(x, y, direction, radius, &name)
                .with_context(|| format!("cannot create worm `{name}`"))?;
            let inspection = Inspection::of(&worm);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                println!("{}", inspection.describe());
            }
            Ok(())
        }
    }
}

fn run(facade: &Facade, scenario: &Scenario, json: bool) -> Result<()> {
    let mut worm = scenario.spawn(facade)?;
    log::info!(
        "running {} actions for {}",
        scenario.actions().len(),
        facade.name(&worm)
    );

    let mut events = Vec::with_capacity(scenario.actions().len());
    for command in scenario.actions() {
        worms_core::apply(&mut worm, command.clone(), &mut events);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&worm.snapshot())?);
    } else {
        for event in &events {
            println!("{}", report::describe_event(event));
        }
        println!("{}", report::describe_state(&worm.snapshot()));
    }
    Ok(())
}

//! Muster CLI
//!
//! Thin presentation layer over `muster_core`: parses commands, invokes the
//! coordination engine, and renders initiative state to the terminal.

mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use muster_core::{
    CoordinationError, DeploymentCatalog, DeploymentCoordinator, InitiativeStore,
    ProgressSimulator, SessionStore,
};

/// Suites activated by `deploy` when none are named
const DEFAULT_DEPLOY_SUITES: &[&str] = &["semantic", "federation", "compliance"];

#[derive(Parser)]
#[command(
    name = "muster",
    version,
    about = "Coordinate simulated agent suites across an initiative"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new initiative and activate every suite
    Create {
        /// Initiative name
        #[arg(default_value = "Federation Proof of Concept")]
        name: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Activate agent suites on the current initiative
    Deploy {
        /// Suite names (defaults to semantic, federation, compliance)
        suites: Vec<String>,
    },
    /// Show agent status for the current initiative
    Status,
    /// Advance active agents over a number of simulation rounds
    Simulate {
        /// Number of rounds
        #[arg(short, long, default_value_t = 5)]
        rounds: u32,
    },
    /// Print the tmux layout for a development session
    Tmux,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let sessions = SessionStore::open_default()
        .await
        .context("failed to open session store")?;
    let coordinator = DeploymentCoordinator::new(DeploymentCatalog::builtin());
    let mut store = InitiativeStore::new();

    match cli.command {
        Command::Create { name, description } => {
            let initiative = store
                .create(coordinator.catalog(), &sessions, &name, &description)
                .await?;
            println!(
                "🎯 Created initiative: {} ({})",
                initiative.name, initiative.id
            );
            println!(
                "📋 Staged {} agents across {} suites",
                initiative.agents.len(),
                coordinator.catalog().suites().len()
            );

            let all = coordinator.catalog().suite_names();
            println!("🚀 Deploying agent suites: {}", all.join(", "));
            let report = coordinator.activate(&mut store, &sessions, &all).await?;
            render::print_activation(&report);
        }
        Command::Deploy { suites } => {
            let suites = if suites.is_empty() {
                DEFAULT_DEPLOY_SUITES.iter().map(|s| s.to_string()).collect()
            } else {
                suites
            };
            println!("🚀 Deploying agent suites: {}", suites.join(", "));
            match coordinator.activate(&mut store, &sessions, &suites).await {
                Ok(report) => render::print_activation(&report),
                Err(CoordinationError::NoActiveInitiative) => {
                    println!("❌ No active initiative. Create one first.");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Status => match store.current() {
            Some(initiative) => render::print_status(initiative),
            None => println!("❌ No active initiative"),
        },
        Command::Simulate { rounds } => {
            let mut simulator = ProgressSimulator::from_entropy();
            println!("🤖 Running agent execution simulation...");
            for _ in 0..rounds {
                tokio::time::sleep(Duration::from_secs(1)).await;
                match simulator.tick(&mut store, &sessions).await {
                    Ok(report) => render::print_tick(&report),
                    Err(CoordinationError::NoActiveInitiative) => {
                        println!("❌ No active initiative. Create one first.");
                        break;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            if let Some(initiative) = store.current() {
                render::print_status(initiative);
            }
        }
        Command::Tmux => {
            println!("{}", render::tmux_layout(coordinator.catalog()));
        }
    }

    Ok(())
}

//! Waypoint CLI - Command-line interface for Waypoint
//!
//! Loads a route file, runs a single query against it and prints the
//! result. Nothing is written back to the route file.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author = "Waypoint Contributors")]
#[command(version)]
#[command(about = "Route planning over a map of cities", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Route file to load
    #[arg(short, long, global = true, default_value = "routes.json")]
    map: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cheapest path between two cities
    Shortest { from: String, to: String },

    /// Path with the fewest stops between two cities
    Stops { from: String, to: String },

    /// Every city reachable from a starting city
    Reachable { from: String },

    /// Cheapest set of routes connecting every city
    Network,

    /// Longest simple path between two cities
    Longest { from: String, to: String },

    /// Visiting order for a list of cities (nearest neighbor first)
    Tour {
        /// Cities to visit; the tour starts at the first one
        #[arg(required = true)]
        cities: Vec<String>,
    },

    /// List every city
    Cities,

    /// List every route
    Routes,

    /// Show map statistics
    Stats,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let output = commands::Output { json: cli.json };
    let result = commands::load(&cli.map).and_then(|planner| match cli.command {
        Commands::Shortest { from, to } => commands::shortest(&planner, &from, &to, output),
        Commands::Stops { from, to } => commands::stops(&planner, &from, &to, output),
        Commands::Reachable { from } => commands::reachable(&planner, &from, output),
        Commands::Network => commands::network(&planner, output),
        Commands::Longest { from, to } => commands::longest(&planner, &from, &to, output),
        Commands::Tour { cities } => commands::tour(&planner, &cities, output),
        Commands::Cities => commands::cities(&planner, output),
        Commands::Routes => commands::routes(&planner, output),
        Commands::Stats => commands::stats(&planner, output),
    });

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

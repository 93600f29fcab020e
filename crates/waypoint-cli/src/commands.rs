//! CLI command implementations.

use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use waypoint_graph::{load_map, Outcome, PathResult, TravelPlanner};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

/// Load the route file into a planner.
pub fn load(path: &Path) -> Result<TravelPlanner> {
    let (map, config) = load_map(path)?;
    info!(
        "Loaded {} cities and {} routes from {}",
        map.city_count(),
        map.route_count(),
        path.display()
    );
    Ok(TravelPlanner::with_map(map, config))
}

/// Cheapest path between two cities.
pub fn shortest(planner: &TravelPlanner, from: &str, to: &str, output: Output) -> Result<()> {
    let outcome = planner.find_shortest_path(from, to);
    report_path(planner, &outcome, output)
}

/// Path with the fewest stops.
pub fn stops(planner: &TravelPlanner, from: &str, to: &str, output: Output) -> Result<()> {
    let outcome = planner.find_fewest_stops(from, to);
    if output.json {
        print_json(&outcome)?;
    }
    if !outcome.success {
        return Err(outcome.message.into());
    }
    if !output.json {
        println!("{} {}", "✓".green(), outcome.message);
        println!("  {}", format_path(&outcome.data.path));
        println!(
            "  {} {}",
            "Stops:".dimmed(),
            outcome.data.stops.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Distance:".dimmed(),
            planner.config().format_distance(outcome.data.distance)
        );
    }
    Ok(())
}

/// Cities reachable from a starting city.
pub fn reachable(planner: &TravelPlanner, from: &str, output: Output) -> Result<()> {
    if !planner.map().contains(from) {
        return Err(format!("City '{}' not found in the map", from).into());
    }
    let cities = planner.get_reachable_cities(from);

    if output.json {
        return print_json(&serde_json::json!({
            "start": from,
            "reachable": cities,
        }));
    }

    if cities.is_empty() {
        println!("No cities reachable from {}", from.cyan());
        return Ok(());
    }
    println!(
        "{} {} cities reachable from {}:",
        "✓".green(),
        cities.len().to_string().cyan(),
        from.cyan()
    );
    println!("  {}", cities.join(", "));
    Ok(())
}

/// Cheapest connecting network.
pub fn network(planner: &TravelPlanner, output: Output) -> Result<()> {
    let outcome = planner.find_cheapest_network();
    if output.json {
        print_json(&outcome)?;
    }
    if !outcome.success {
        return Err(outcome.message.into());
    }
    if !output.json {
        println!("{} {}", "✓".green(), outcome.message);
        for route in &outcome.data.routes {
            println!(
                "  {} <-> {} {}",
                route.from,
                route.to,
                format!("({})", planner.config().format_distance(route.distance)).dimmed()
            );
        }
    }
    Ok(())
}

/// Longest simple path.
pub fn longest(planner: &TravelPlanner, from: &str, to: &str, output: Output) -> Result<()> {
    let outcome = planner.find_longest_path(from, to);
    report_path(planner, &outcome, output)
}

/// Greedy multi-city tour.
pub fn tour(planner: &TravelPlanner, cities: &[String], output: Output) -> Result<()> {
    let outcome = planner.plan_tour(cities);
    report_path(planner, &outcome, output)
}

/// List every city.
pub fn cities(planner: &TravelPlanner, output: Output) -> Result<()> {
    let cities = planner.get_all_cities();
    if output.json {
        return print_json(&cities);
    }
    for city in cities {
        println!("  {}", city);
    }
    Ok(())
}

/// List every route.
pub fn routes(planner: &TravelPlanner, output: Output) -> Result<()> {
    let routes = planner.get_all_routes();
    if output.json {
        return print_json(&routes);
    }
    for route in routes {
        println!(
            "  {} <-> {} {}",
            route.from,
            route.to,
            format!("({})", planner.config().format_distance(route.distance)).dimmed()
        );
    }
    Ok(())
}

/// Show map statistics.
pub fn stats(planner: &TravelPlanner, output: Output) -> Result<()> {
    let stats = planner.get_map_stats();
    if output.json {
        return print_json(&stats);
    }
    println!("{}", "Map Statistics".cyan().bold());
    println!();
    println!("  {} {}", "Cities:".dimmed(), stats.city_count);
    println!("  {} {}", "Routes:".dimmed(), stats.route_count);
    Ok(())
}

fn report_path(planner: &TravelPlanner, outcome: &Outcome<PathResult>, output: Output) -> Result<()> {
    if output.json {
        print_json(outcome)?;
    }
    if !outcome.success {
        return Err(outcome.message.clone().into());
    }
    if !output.json {
        println!("{} {}", "✓".green(), outcome.message);
        println!("  {}", format_path(&outcome.data.path));
        println!(
            "  {} {}",
            "Total Distance:".dimmed(),
            planner.config().format_distance(outcome.data.distance).cyan()
        );
    }
    Ok(())
}

fn format_path(path: &[String]) -> String {
    path.iter()
        .map(|city| city.cyan().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

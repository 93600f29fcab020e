//! Envelope-returning facade over the route map.
//!
//! `TravelPlanner` is the call surface used by front ends. Every query
//! returns an `Outcome` (or `Status` for mutations) instead of a `Result`,
//! so callers only ever have to present `message` and, on success, the
//! payload.

use crate::config::PlannerConfig;
use crate::edge::RouteRecord;
use crate::graph::{MapStats, RouteMap};
use crate::query::{NetworkResult, Outcome, PathResult, Status, StopsResult};
use tracing::{debug, warn};

/// A route map plus the settings used to describe results.
#[derive(Debug, Default, Clone)]
pub struct TravelPlanner {
    map: RouteMap,
    config: PlannerConfig,
}

impl TravelPlanner {
    /// Creates a planner with an empty map and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing map.
    pub fn with_map(map: RouteMap, config: PlannerConfig) -> Self {
        Self { map, config }
    }

    /// Read-only access to the underlying map.
    pub fn map(&self) -> &RouteMap {
        &self.map
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn add_route(&mut self, source: &str, destination: &str, distance: i64) -> Status {
        match self.map.add_route(source, destination, distance) {
            Ok(distance) => Status::ok(format!(
                "Successfully added: {} <-> {} ({})",
                source,
                destination,
                self.config.format_distance(distance)
            )),
            Err(err) => {
                warn!(source, destination, distance, "route rejected: {}", err);
                Status::failure(&err)
            }
        }
    }

    pub fn delete_route(&mut self, source: &str, destination: &str) -> Status {
        match self.map.delete_route(source, destination) {
            Ok(()) => Status::ok(format!(
                "Route between {} and {} deleted.",
                source, destination
            )),
            Err(err) => Status::failure(&err),
        }
    }

    /// Removes every city and route.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn find_shortest_path(&self, start: &str, end: &str) -> Outcome<PathResult> {
        let result = self.map.shortest_path(start, end);
        let message = match &result {
            Ok(found) => format!(
                "Path found successfully ({}).",
                self.config.format_distance(found.distance)
            ),
            Err(_) => String::new(),
        };
        Outcome::from_result(result, message)
    }

    pub fn find_fewest_stops(&self, start: &str, end: &str) -> Outcome<StopsResult> {
        Outcome::from_result(
            self.map.fewest_stops(start, end),
            "Route with fewest stops found.",
        )
    }

    /// Returns the cities reachable from `start`.
    ///
    /// An unknown start yields an empty list rather than an error.
    pub fn get_reachable_cities(&self, start: &str) -> Vec<String> {
        self.map.reachable_cities(start).unwrap_or_else(|err| {
            debug!(start, "no reachable cities: {}", err);
            Vec::new()
        })
    }

    pub fn find_cheapest_network(&self) -> Outcome<NetworkResult> {
        let result = self.map.cheapest_network();
        let message = match &result {
            Ok(network) => format!(
                "Cheapest network found: {} routes, {} total.",
                network.routes.len(),
                self.config.format_distance(network.total_cost)
            ),
            Err(_) => String::new(),
        };
        Outcome::from_result(result, message)
    }

    pub fn find_longest_path(&self, start: &str, end: &str) -> Outcome<PathResult> {
        Outcome::from_result(self.map.longest_path(start, end), "Longest path found.")
    }

    pub fn plan_tour<S: AsRef<str>>(&self, cities: &[S]) -> Outcome<PathResult> {
        let message = if cities.len() == 1 {
            "Single city tour."
        } else {
            "Tour planned successfully."
        };
        Outcome::from_result(self.map.plan_tour(cities), message)
    }

    pub fn get_all_cities(&self) -> Vec<String> {
        self.map.cities().map(str::to_string).collect()
    }

    pub fn get_all_routes(&self) -> Vec<RouteRecord> {
        self.map.routes()
    }

    pub fn get_map_stats(&self) -> MapStats {
        self.map.stats()
    }
}

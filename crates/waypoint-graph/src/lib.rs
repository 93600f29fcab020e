//! Waypoint Graph - Route maps and path finding
//!
//! This crate stores an undirected, weighted map of cities and routes and
//! answers path-finding questions about it: cheapest path, fewest stops,
//! reachability, cheapest connecting network, longest simple path and a
//! greedy multi-city tour.
//!
//! # Architecture
//!
//! `RouteMap` owns one insertion-ordered adjacency list per city, keyed by a
//! dense `CityId`. Each algorithm lives in its own module as an `impl
//! RouteMap` block and returns a `Result`. `TravelPlanner` wraps a map and
//! turns those results into serializable success/message envelopes.
//!
//! # Example
//!
//! ```
//! use waypoint_graph::RouteMap;
//!
//! let mut map = RouteMap::new();
//! map.add_route("A", "B", 1).unwrap();
//! map.add_route("B", "C", 2).unwrap();
//! map.add_route("A", "C", 10).unwrap();
//!
//! let best = map.shortest_path("A", "C").unwrap();
//! assert_eq!(best.path, vec!["A", "B", "C"]);
//! assert_eq!(best.distance, 3);
//! ```

mod builder;
mod city_index;
mod config;
mod edge;
mod error;
mod fewest;
mod graph;
mod loader;
mod longest;
mod network;
mod planner;
mod query;
mod reachable;
mod shortest;
mod tour;

pub use builder::MapBuilder;
pub use city_index::{CityId, CityIndex};
pub use config::PlannerConfig;
pub use edge::{Distance, Route, RouteRecord};
pub use error::{Result, RouteError};
pub use graph::{MapStats, RouteMap};
pub use loader::{load_map, LoadError, MapFile, RouteEntry};
pub use planner::TravelPlanner;
pub use query::{NetworkResult, Outcome, PathResult, Status, StopsResult};

//! Core graph data structure.
//!
//! The RouteMap owns every city and route. It keeps one ordered adjacency
//! list per city so traversals see neighbors in the order routes were added.
//! All algorithms borrow it read-only.

use crate::city_index::{CityId, CityIndex};
use crate::edge::{Distance, Route, RouteRecord};
use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// An undirected, positively weighted graph of cities and routes.
#[derive(Debug, Default, Clone)]
pub struct RouteMap {
    /// Name <-> dense id mapping.
    cities: CityIndex,

    /// Adjacency lists, indexed by `CityId`.
    adjacency: Vec<Vec<Route>>,

    /// Number of undirected routes.
    route_count: usize,
}

impl RouteMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route between two cities, replacing any existing route
    /// between the same pair.
    ///
    /// Unknown endpoints become known cities. A replaced route moves to the
    /// end of both adjacency lists. Fails without touching the map if
    /// `distance` is not positive.
    pub fn add_route(&mut self, from: &str, to: &str, distance: i64) -> Result<Distance> {
        if distance <= 0 {
            return Err(RouteError::InvalidWeight(distance));
        }
        let distance = distance.unsigned_abs();

        let a = self.intern(from);
        let b = self.intern(to);

        if self.detach(a, b) {
            trace!(from, to, "replacing existing route");
        } else {
            self.route_count += 1;
        }

        self.adjacency[a.index()].push(Route::new(b, distance));
        if a != b {
            self.adjacency[b.index()].push(Route::new(a, distance));
        }

        debug!(from, to, distance, "route added");
        Ok(distance)
    }

    /// Removes the route between two cities.
    ///
    /// Both cities stay known even if this leaves them isolated.
    pub fn delete_route(&mut self, from: &str, to: &str) -> Result<()> {
        let not_found = || RouteError::RouteNotFound {
            from: from.to_string(),
            to: to.to_string(),
        };

        let a = self.get_index(from).ok_or_else(not_found)?;
        let b = self.get_index(to).ok_or_else(not_found)?;

        if !self.detach(a, b) {
            return Err(not_found());
        }
        self.route_count -= 1;

        debug!(from, to, "route deleted");
        Ok(())
    }

    /// Returns true if a route joins the two cities.
    pub fn has_route(&self, from: &str, to: &str) -> bool {
        match (self.get_index(from), self.get_index(to)) {
            (Some(a), Some(b)) => self.route_distance(a, b).is_some(),
            _ => false,
        }
    }

    /// Returns the routes leaving a city as `(neighbor, distance)` pairs,
    /// in insertion order. Unknown cities have no neighbors.
    pub fn neighbors(&self, city: &str) -> Vec<(&str, Distance)> {
        self.get_index(city)
            .map(|id| {
                self.routes_from(id)
                    .iter()
                    .map(|route| (self.city_name(route.to), route.distance))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if the city is known to the map.
    pub fn contains(&self, city: &str) -> bool {
        self.cities.resolve(city).is_some()
    }

    /// Iterates over all known cities, in the order they were first seen.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.names()
    }

    /// Returns every route exactly once, endpoints in canonical order.
    pub fn routes(&self) -> Vec<RouteRecord> {
        self.route_pairs()
            .map(|(a, b, distance)| {
                RouteRecord::new(self.city_name(a), self.city_name(b), distance)
            })
            .collect()
    }

    /// Returns the number of known cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of routes.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Removes every city and route.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.adjacency.clear();
        self.route_count = 0;
        debug!("route map cleared");
    }

    /// Gets the dense id for a city name.
    pub fn get_index(&self, city: &str) -> Option<CityId> {
        self.cities.resolve(city)
    }

    /// Gets the name behind a dense id.
    pub(crate) fn city_name(&self, id: CityId) -> &str {
        self.cities.name(id)
    }

    /// Iterates over all dense ids.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> {
        self.cities.ids()
    }

    /// Returns a city's adjacency list, empty for an id this map never issued.
    pub(crate) fn routes_from(&self, id: CityId) -> &[Route] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the distance of the direct route between two cities, if any.
    pub(crate) fn route_distance(&self, a: CityId, b: CityId) -> Option<Distance> {
        self.routes_from(a)
            .iter()
            .find(|route| route.to == b)
            .map(|route| route.distance)
    }

    /// Resolves a city or fails with `CityNotFound`.
    pub(crate) fn require(&self, city: &str) -> Result<CityId> {
        self.get_index(city)
            .ok_or_else(|| RouteError::CityNotFound(city.to_string()))
    }

    /// Every undirected route once, as `(smaller, larger, distance)` where
    /// the endpoints are ordered by name.
    pub(crate) fn route_pairs(&self) -> impl Iterator<Item = (CityId, CityId, Distance)> + '_ {
        self.city_ids().flat_map(move |a| {
            self.routes_from(a).iter().filter_map(move |route| {
                (self.city_name(a) <= self.city_name(route.to))
                    .then_some((a, route.to, route.distance))
            })
        })
    }

    fn intern(&mut self, city: &str) -> CityId {
        let id = self.cities.insert(city);
        if id.index() == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Drops the route between `a` and `b` from both lists. Returns false
    /// if there was none.
    fn detach(&mut self, a: CityId, b: CityId) -> bool {
        let before = self.adjacency[a.index()].len();
        self.adjacency[a.index()].retain(|route| route.to != b);
        if self.adjacency[a.index()].len() == before {
            return false;
        }
        self.adjacency[b.index()].retain(|route| route.to != a);
        true
    }
}

/// Map statistics for the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub city_count: usize,
    pub route_count: usize,
}

impl RouteMap {
    /// Returns map statistics.
    pub fn stats(&self) -> MapStats {
        MapStats {
            city_count: self.city_count(),
            route_count: self.route_count(),
        }
    }
}

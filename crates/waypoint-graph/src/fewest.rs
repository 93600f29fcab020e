//! Fewest-stops search.
//!
//! Breadth-first search from the start city, ignoring route weights. The
//! first time a city is discovered its predecessor is recorded, so the path
//! rebuilt from the target has the minimum number of hops.

use crate::city_index::CityId;
use crate::edge::Distance;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use crate::query::StopsResult;
use std::collections::VecDeque;
use tracing::debug;

impl RouteMap {
    /// Finds the path with the fewest stops between two cities.
    ///
    /// # Arguments
    /// * `start` - City to leave from
    /// * `end` - City to arrive at
    ///
    /// # Returns
    /// The path, its hop count and the total distance along it.
    pub fn fewest_stops(&self, start: &str, end: &str) -> Result<StopsResult> {
        let source = self.require(start)?;
        let target = self.require(end)?;

        let n = self.city_count();
        let mut visited = vec![false; n];
        let mut prev: Vec<Option<CityId>> = vec![None; n];
        let mut queue: VecDeque<CityId> = VecDeque::new();

        visited[source.index()] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            if current == target {
                let path = self.unwind_path(&prev, source, target);
                let distance = self.path_distance(&prev, source, target);
                let stops = path.len() - 1;

                debug!(start, end, stops, "fewest-stops path found");
                return Ok(StopsResult {
                    path,
                    stops,
                    distance,
                });
            }

            for route in self.routes_from(current) {
                if !visited[route.to.index()] {
                    visited[route.to.index()] = true;
                    prev[route.to.index()] = Some(current);
                    queue.push_back(route.to);
                }
            }
        }

        Err(RouteError::unreachable(start, end))
    }

    /// Sums route distances along a predecessor chain.
    fn path_distance(&self, prev: &[Option<CityId>], source: CityId, target: CityId) -> Distance {
        let mut total: Distance = 0;
        let mut current = target;
        while current != source {
            let Some(parent) = prev[current.index()] else {
                break;
            };
            total = total.saturating_add(self.route_distance(parent, current).unwrap_or(0));
            current = parent;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_takes_direct_route() {
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 2).unwrap();
        map.add_route("A", "C", 10).unwrap();

        let result = map.fewest_stops("A", "C").unwrap();
        assert_eq!(result.path, vec!["A", "C"]);
        assert_eq!(result.stops, 1);
        assert_eq!(result.distance, 10);
    }

    #[test]
    fn test_linear_chain() {
        // A - B - C - D
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 1).unwrap();
        map.add_route("C", "D", 1).unwrap();

        let result = map.fewest_stops("A", "D").unwrap();
        assert_eq!(result.path, vec!["A", "B", "C", "D"]);
        assert_eq!(result.stops, 3);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_diamond_pattern() {
        //     A
        //    / \
        //   B   C
        //    \ /
        //     D
        let mut map = RouteMap::new();
        map.add_route("A", "B", 7).unwrap();
        map.add_route("A", "C", 1).unwrap();
        map.add_route("B", "D", 7).unwrap();
        map.add_route("C", "D", 1).unwrap();

        // B is discovered first, weights are ignored
        let result = map.fewest_stops("A", "D").unwrap();
        assert_eq!(result.path, vec!["A", "B", "D"]);
        assert_eq!(result.stops, 2);
        assert_eq!(result.distance, 14);
    }

    #[test]
    fn test_cycle_no_infinite_loop() {
        // A - B - C - A, plus an island
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 1).unwrap();
        map.add_route("C", "A", 1).unwrap();
        map.add_route("X", "Y", 1).unwrap();

        let err = map.fewest_stops("A", "X").unwrap_err();
        assert_eq!(err, RouteError::unreachable("A", "X"));
    }

    #[test]
    fn test_same_city() {
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();

        let result = map.fewest_stops("A", "A").unwrap();
        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.stops, 0);
    }

    #[test]
    fn test_unknown_start() {
        let map = RouteMap::new();
        let err = map.fewest_stops("A", "B").unwrap_err();
        assert_eq!(err, RouteError::CityNotFound("A".to_string()));
    }
}

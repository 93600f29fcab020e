//! Multi-city tour planning with the greedy nearest-neighbor heuristic.
//!
//! The tour starts at the first listed city and always moves to the closest
//! unvisited listed city over a direct route. It never backtracks, so the
//! total is not guaranteed to be minimal, and it does not return to the start.

use crate::city_index::CityId;
use crate::edge::Distance;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use crate::query::PathResult;
use tracing::debug;

impl RouteMap {
    /// Orders the given cities into a tour.
    ///
    /// Repeated names are visited once. Ties between equally close cities
    /// go to the one listed first.
    pub fn plan_tour<S: AsRef<str>>(&self, cities: &[S]) -> Result<PathResult> {
        if cities.is_empty() {
            return Err(RouteError::NoCitiesProvided);
        }

        let mut stops: Vec<CityId> = Vec::with_capacity(cities.len());
        for city in cities {
            let id = self.require(city.as_ref())?;
            if !stops.contains(&id) {
                stops.push(id);
            }
        }

        let mut visited = vec![false; stops.len()];
        let mut order = Vec::with_capacity(stops.len());
        let mut total: Distance = 0;

        let mut current = stops[0];
        visited[0] = true;
        order.push(current);

        for _ in 1..stops.len() {
            let nearest = stops
                .iter()
                .enumerate()
                .filter(|(slot, _)| !visited[*slot])
                .filter_map(|(slot, &city)| {
                    self.route_distance(current, city)
                        .map(|distance| (distance, slot))
                })
                .min_by_key(|&(distance, slot)| (distance, slot));

            let Some((distance, slot)) = nearest else {
                return Err(RouteError::NotAllReachable(
                    self.city_name(current).to_string(),
                ));
            };

            visited[slot] = true;
            current = stops[slot];
            order.push(current);
            total = total.saturating_add(distance);
        }

        let path: Vec<String> = order
            .into_iter()
            .map(|id| self.city_name(id).to_string())
            .collect();

        debug!(stops = path.len(), total, "tour planned");
        Ok(PathResult {
            path,
            distance: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> RouteMap {
        //   A --1-- B
        //   |     / |
        //   4   2   3
        //   | /     |
        //   D --5-- C
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 3).unwrap();
        map.add_route("C", "D", 5).unwrap();
        map.add_route("A", "D", 4).unwrap();
        map.add_route("B", "D", 2).unwrap();
        map
    }

    #[test]
    fn test_greedy_order() {
        let result = square().plan_tour(&["A", "C", "D", "B"]).unwrap();
        assert_eq!(result.path, vec!["A", "B", "D", "C"]);
        assert_eq!(result.distance, 8);
    }

    #[test]
    fn test_subset_of_cities() {
        let result = square().plan_tour(&["C", "A", "B"]).unwrap();
        assert_eq!(result.path, vec!["C", "B", "A"]);
        assert_eq!(result.distance, 4);
    }

    #[test]
    fn test_no_multi_hop_bridging() {
        // A and C are only connected through B, which is not on the list.
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 1).unwrap();

        assert_eq!(
            map.plan_tour(&["A", "C"]),
            Err(RouteError::NotAllReachable("A".to_string()))
        );
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(square().plan_tour(&empty), Err(RouteError::NoCitiesProvided));
    }

    #[test]
    fn test_single_city() {
        let result = square().plan_tour(&["C"]).unwrap();
        assert_eq!(result.path, vec!["C"]);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_unknown_city_named() {
        assert_eq!(
            square().plan_tour(&["A", "Atlantis", "B"]),
            Err(RouteError::CityNotFound("Atlantis".to_string()))
        );
        assert_eq!(
            square().plan_tour(&["Atlantis"]),
            Err(RouteError::CityNotFound("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_repeated_city_visited_once() {
        let result = square()
            .plan_tour(&["A".to_string(), "B".to_string(), "A".to_string()])
            .unwrap();
        assert_eq!(result.path, vec!["A", "B"]);
        assert_eq!(result.distance, 1);
    }
}

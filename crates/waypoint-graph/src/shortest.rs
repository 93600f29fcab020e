//! Weighted shortest path (Dijkstra).

use crate::city_index::CityId;
use crate::edge::Distance;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use crate::query::PathResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Min-heap entry: tentative distance, then push order, then city.
///
/// The sequence number makes equal distances pop in the order they were
/// pushed.
type HeapEntry = Reverse<(Distance, u64, CityId)>;

impl RouteMap {
    /// Finds the least-cost path between two cities.
    ///
    /// Both cities must be known. When several paths share the minimum
    /// cost, the first one relaxed wins.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathResult> {
        let source = self.require(start)?;
        let target = self.require(end)?;

        let n = self.city_count();
        let mut dist: Vec<Option<Distance>> = vec![None; n];
        let mut prev: Vec<Option<CityId>> = vec![None; n];
        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
        let mut pushed = 0u64;

        dist[source.index()] = Some(0);
        heap.push(Reverse((0, pushed, source)));

        while let Some(Reverse((d, _, city))) = heap.pop() {
            // Stale entry
            if dist[city.index()].is_some_and(|best| d > best) {
                continue;
            }
            if city == target {
                break;
            }

            for route in self.routes_from(city) {
                let candidate = d.saturating_add(route.distance);
                let slot = &mut dist[route.to.index()];
                if slot.map_or(true, |current| candidate < current) {
                    *slot = Some(candidate);
                    prev[route.to.index()] = Some(city);
                    pushed += 1;
                    heap.push(Reverse((candidate, pushed, route.to)));
                }
            }
        }

        let distance = dist[target.index()].ok_or_else(|| RouteError::unreachable(start, end))?;
        let path = self.unwind_path(&prev, source, target);

        debug!(start, end, distance, hops = path.len() - 1, "shortest path found");
        Ok(PathResult { path, distance })
    }

    /// Rebuilds a path by following predecessors back from `target`.
    pub(crate) fn unwind_path(
        &self,
        prev: &[Option<CityId>],
        source: CityId,
        target: CityId,
    ) -> Vec<String> {
        let mut path = vec![self.city_name(target).to_string()];
        let mut current = target;
        while current != source {
            match prev[current.index()] {
                Some(parent) => {
                    path.push(self.city_name(parent).to_string());
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("B", "C", 2).unwrap();
        map.add_route("A", "C", 10).unwrap();
        map
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let result = triangle().shortest_path("A", "C").unwrap();
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_same_city() {
        let result = triangle().shortest_path("B", "B").unwrap();
        assert_eq!(result.path, vec!["B"]);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_unknown_city() {
        let err = triangle().shortest_path("A", "Nowhere").unwrap_err();
        assert_eq!(err, RouteError::CityNotFound("Nowhere".to_string()));
    }

    #[test]
    fn test_unreachable() {
        let mut map = triangle();
        map.add_route("X", "Y", 1).unwrap();

        let err = map.shortest_path("A", "Y").unwrap_err();
        assert_eq!(err.code(), "unreachable");
    }

    #[test]
    fn test_longer_chain() {
        //   A --4-- B --1-- D
        //   |               |
        //   1               1
        //   |               |
        //   C ------6------ E
        let mut map = RouteMap::new();
        map.add_route("A", "B", 4).unwrap();
        map.add_route("B", "D", 1).unwrap();
        map.add_route("A", "C", 1).unwrap();
        map.add_route("C", "E", 6).unwrap();
        map.add_route("D", "E", 1).unwrap();

        let result = map.shortest_path("A", "E").unwrap();
        assert_eq!(result.distance, 6);
        assert_eq!(result.path, vec!["A", "B", "D", "E"]);
    }

    #[test]
    fn test_equal_cost_tie_first_relaxed_wins() {
        // A-B-D and A-C-D both cost 2; B is relaxed (and popped) first.
        let mut map = RouteMap::new();
        map.add_route("A", "B", 1).unwrap();
        map.add_route("A", "C", 1).unwrap();
        map.add_route("B", "D", 1).unwrap();
        map.add_route("C", "D", 1).unwrap();

        let result = map.shortest_path("A", "D").unwrap();
        assert_eq!(result.path, vec!["A", "B", "D"]);
    }
}

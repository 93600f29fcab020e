//! Reachability via iterative depth-first search.

use crate::error::Result;
use crate::graph::RouteMap;
use tracing::debug;

impl RouteMap {
    /// Returns every city reachable from `start`, excluding `start`, in
    /// the order the depth-first search visits them.
    ///
    /// Uses an explicit stack so deep maps cannot overflow the call stack.
    /// Neighbors are pushed in adjacency order, so the last-added route of
    /// a city is explored first.
    pub fn reachable_cities(&self, start: &str) -> Result<Vec<String>> {
        let source = self.require(start)?;

        let mut visited = vec![false; self.city_count()];
        let mut stack = vec![source];
        let mut reachable = Vec::new();

        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;

            if current != source {
                reachable.push(self.city_name(current).to_string());
            }
            stack.extend(self.routes_from(current).iter().map(|route| route.to));
        }

        debug!(start, count = reachable.len(), "reachable cities collected");
        Ok(reachable)
    }
}

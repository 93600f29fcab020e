//! Cheapest network: a minimum spanning tree built with Kruskal's algorithm.
//!
//! Routes are sorted by distance (ties by endpoint names) and accepted
//! whenever they join two separate regions. Region membership is tracked with
//! petgraph's union-find, which uses union by rank and path compression over
//! the map's dense city ids.

use crate::edge::RouteRecord;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use crate::query::NetworkResult;
use petgraph::unionfind::UnionFind;
use tracing::debug;

impl RouteMap {
    /// Finds the set of routes connecting every city at minimum total cost.
    ///
    /// Fails with `EmptyGraph` when there are no cities and with
    /// `Disconnected` when no spanning set exists. Partial results are
    /// never returned.
    pub fn cheapest_network(&self) -> Result<NetworkResult> {
        let n = self.city_count();
        if n == 0 {
            return Err(RouteError::EmptyGraph);
        }

        let mut candidates: Vec<_> = self.route_pairs().collect();
        candidates.sort_by(|(a1, b1, d1), (a2, b2, d2)| {
            d1.cmp(d2)
                .then_with(|| self.city_name(*a1).cmp(self.city_name(*a2)))
                .then_with(|| self.city_name(*b1).cmp(self.city_name(*b2)))
        });

        let mut regions: UnionFind<usize> = UnionFind::new(n);
        let mut routes = Vec::with_capacity(n - 1);
        let mut total_cost = 0u64;

        for (a, b, distance) in candidates {
            if routes.len() == n - 1 {
                break;
            }
            if regions.union(a.index(), b.index()) {
                routes.push(RouteRecord::new(
                    self.city_name(a),
                    self.city_name(b),
                    distance,
                ));
                total_cost = total_cost.saturating_add(distance);
            }
        }

        if routes.len() < n - 1 {
            let components = n - routes.len();
            debug!(components, "map is disconnected");
            return Err(RouteError::Disconnected { components });
        }

        debug!(routes = routes.len(), total_cost, "cheapest network found");
        Ok(NetworkResult { routes, total_cost })
    }
}

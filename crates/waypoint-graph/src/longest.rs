//! Longest simple path by exhaustive backtracking.
//!
//! Every simple path from start to end is enumerated. This is exponential in
//! the worst case and has no time limit.

use crate::city_index::CityId;
use crate::edge::Distance;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use crate::query::PathResult;
use tracing::{debug, trace};

/// One level of the backtracking search.
#[derive(Debug, Clone, Copy)]
struct Frame {
    city: CityId,
    /// Index of the next route of `city` to try.
    next: usize,
    /// Path distance from the start to `city`.
    reached: Distance,
}

impl Frame {
    fn new(city: CityId, reached: Distance) -> Self {
        Self {
            city,
            next: 0,
            reached,
        }
    }
}

impl RouteMap {
    /// Finds the simple path with the greatest total distance between two
    /// distinct cities.
    pub fn longest_path(&self, start: &str, end: &str) -> Result<PathResult> {
        let source = self.require(start)?;
        let target = self.require(end)?;
        if source == target {
            return Err(RouteError::SameCity(start.to_string()));
        }

        let mut on_path = vec![false; self.city_count()];
        let mut path = vec![source];
        let mut frames = vec![Frame::new(source, 0)];
        let mut best: Option<(Distance, Vec<CityId>)> = None;
        let mut explored = 0usize;

        on_path[source.index()] = true;

        while let Some(top) = frames.len().checked_sub(1) {
            let frame = frames[top];

            let Some(route) = self.routes_from(frame.city).get(frame.next).copied() else {
                // All routes tried: unmark and backtrack.
                frames.pop();
                on_path[frame.city.index()] = false;
                path.pop();
                continue;
            };
            frames[top].next += 1;

            if on_path[route.to.index()] {
                continue;
            }

            let reached = frame.reached.saturating_add(route.distance);
            if route.to == target {
                explored += 1;
                if best.as_ref().map_or(true, |(longest, _)| reached > *longest) {
                    let mut found = path.clone();
                    found.push(target);
                    best = Some((reached, found));
                }
                continue;
            }

            on_path[route.to.index()] = true;
            path.push(route.to);
            frames.push(Frame::new(route.to, reached));
        }

        trace!(start, end, explored, "simple paths enumerated");

        let (distance, ids) = best.ok_or_else(|| RouteError::unreachable(start, end))?;
        let path = ids
            .into_iter()
            .map(|id| self.city_name(id).to_string())
            .collect();

        debug!(start, end, distance, "longest path found");
        Ok(PathResult { path, distance })
    }
}

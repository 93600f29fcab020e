//! Route types for the map graph.
//!
//! A `Route` is the adjacency-list entry owned by the graph store. A
//! `RouteRecord` is the name-based form used for input and export.

use crate::city_index::CityId;
use serde::{Deserialize, Serialize};

/// Cost of travelling along a route, or along a whole path.
pub type Distance = u64;

/// A route leaving a city, as stored in that city's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// The city at the other end.
    pub to: CityId,

    /// The route's weight. Always positive.
    pub distance: Distance,
}

impl Route {
    /// Creates a new route entry.
    pub fn new(to: CityId, distance: Distance) -> Self {
        Self { to, distance }
    }
}

/// A route with both endpoints named, for loading and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

impl RouteRecord {
    /// Creates a new record.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// Returns the record with its endpoints in canonical order
    /// (lexicographically smaller city first).
    pub fn canonical(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self {
                from: self.to,
                to: self.from,
                distance: self.distance,
            }
        }
    }

    /// Returns true if this record joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl std::fmt::Display for RouteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {} ({})", self.from, self.to, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_orders_endpoints() {
        let record = RouteRecord::new("Paris", "Lyon", 465).canonical();
        assert_eq!(record.from, "Lyon");
        assert_eq!(record.to, "Paris");
        assert_eq!(record.distance, 465);
    }

    #[test]
    fn test_connects_either_direction() {
        let record = RouteRecord::new("A", "B", 1);
        assert!(record.connects("A", "B"));
        assert!(record.connects("B", "A"));
        assert!(!record.connects("A", "C"));
    }
}

//! Map builder for constructing a route map from route records.
//!
//! Records are collected first and applied in order by `build`, so a
//! caller can assemble a map from several sources before validating it.

use crate::edge::RouteRecord;
use crate::error::{Result, RouteError};
use crate::graph::RouteMap;
use tracing::debug;

/// Builds a RouteMap from route records.
///
/// Later records for the same pair of cities replace earlier ones, exactly
/// as repeated `add_route` calls would.
#[derive(Debug, Default, Clone)]
pub struct MapBuilder {
    routes: Vec<(String, String, i64)>,
}

impl MapBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a single route.
    pub fn route(mut self, from: impl Into<String>, to: impl Into<String>, distance: i64) -> Self {
        self.routes.push((from.into(), to.into(), distance));
        self
    }

    /// Queues every record in `records`.
    ///
    /// Nothing is queued if any distance does not fit a route weight.
    pub fn add_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = RouteRecord>,
    {
        let queued = records
            .into_iter()
            .map(|record| {
                let distance = i64::try_from(record.distance)
                    .map_err(|_| RouteError::DistanceTooLarge(record.distance))?;
                Ok((record.from, record.to, distance))
            })
            .collect::<Result<Vec<_>>>()?;
        self.routes.extend(queued);
        Ok(())
    }

    /// Number of queued routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Applies every queued route and returns the map.
    ///
    /// Stops at the first invalid route.
    pub fn build(self) -> Result<RouteMap> {
        let mut map = RouteMap::new();
        self.build_into(&mut map)?;
        Ok(map)
    }

    /// Applies every queued route to an existing map.
    ///
    /// The map is only touched if every route is valid.
    pub fn build_into(self, map: &mut RouteMap) -> Result<()> {
        if let Some(&(_, _, distance)) = self.routes.iter().find(|(_, _, d)| *d <= 0) {
            return Err(RouteError::InvalidWeight(distance));
        }

        for (from, to, distance) in &self.routes {
            map.add_route(from, to, *distance)?;
        }

        debug!(
            routes = self.routes.len(),
            cities = map.city_count(),
            "route map built"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_adds_routes() {
        let map = MapBuilder::new()
            .route("Paris", "Lyon", 465)
            .route("Lyon", "Marseille", 315)
            .build()
            .unwrap();

        assert_eq!(map.city_count(), 3);
        assert_eq!(map.route_count(), 2);
        assert!(map.has_route("Marseille", "Lyon"));
    }

    #[test]
    fn test_later_record_replaces_earlier() {
        let mut builder = MapBuilder::new();
        builder.add_records(vec![
            RouteRecord::new("A", "B", 5),
            RouteRecord::new("B", "A", 9),
        ])
        .unwrap();
        assert_eq!(builder.len(), 2);

        let map = builder.build().unwrap();
        assert_eq!(map.routes(), vec![RouteRecord::new("A", "B", 9)]);
    }

    #[test]
    fn test_invalid_route_touches_nothing() {
        let mut map = RouteMap::new();
        map.add_route("X", "Y", 1).unwrap();

        let err = MapBuilder::new()
            .route("A", "B", 3)
            .route("B", "C", 0)
            .build_into(&mut map)
            .unwrap_err();

        assert_eq!(err, RouteError::InvalidWeight(0));
        assert_eq!(map.city_count(), 2);
        assert!(!map.contains("A"));
    }

    #[test]
    fn test_oversized_record_rejected() {
        let mut builder = MapBuilder::new().route("A", "B", 1);
        let err = builder
            .add_records(vec![
                RouteRecord::new("B", "C", 2),
                RouteRecord::new("C", "D", u64::MAX),
            ])
            .unwrap_err();

        assert_eq!(err, RouteError::DistanceTooLarge(u64::MAX));
        assert_eq!(err.code(), "distance_too_large");
        assert_eq!(builder.len(), 1);
    }
}

//! Route file loading.
//!
//! A route file is JSON holding planner settings next to a `routes` list.
//! Every route is validated before the map is returned.

use crate::builder::MapBuilder;
use crate::config::PlannerConfig;
use crate::error::RouteError;
use crate::graph::RouteMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read route file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid route file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid route in file: {0}")]
    Route(#[from] RouteError),
}

/// A route as written in a route file.
///
/// The distance is signed so that bad input is reported as an invalid
/// weight rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub distance: i64,
}

/// On-disk route file format.
///
/// ```json
/// { "unit": "km", "routes": [{ "from": "A", "to": "B", "distance": 5 }] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(flatten)]
    pub config: PlannerConfig,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl MapFile {
    /// Parses a route file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the route map described by this file.
    pub fn to_map(&self) -> Result<RouteMap, RouteError> {
        self.routes
            .iter()
            .fold(MapBuilder::new(), |builder, entry| {
                builder.route(entry.from.as_str(), entry.to.as_str(), entry.distance)
            })
            .build()
    }
}

/// Reads a route file and builds its map.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<(RouteMap, PlannerConfig), LoadError> {
    let path = path.as_ref();
    let file = MapFile::from_json(&fs::read_to_string(path)?)?;
    let map = file.to_map()?;

    debug!(
        path = %path.display(),
        cities = map.city_count(),
        routes = map.route_count(),
        "route file loaded"
    );
    Ok((map, file.config))
}

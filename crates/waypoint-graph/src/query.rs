//! Query result types.
//!
//! The algorithms return the payload structs directly inside a `Result`.
//! The planner wraps them in an `Outcome` envelope, which always carries a
//! success flag and a message and serializes flat to JSON.

use crate::edge::{Distance, RouteRecord};
use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};

/// A path through the map and its total distance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub distance: Distance,
}

/// A path with the fewest hops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopsResult {
    pub path: Vec<String>,
    /// Number of routes travelled (path length minus one).
    pub stops: usize,
    /// Sum of the distances along `path`.
    pub distance: Distance,
}

/// A minimum-cost spanning set of routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResult {
    pub routes: Vec<RouteRecord>,
    pub total_cost: Distance,
}

/// Result envelope for a query.
///
/// On failure `data` is left at its default and `error` holds the code of
/// the `RouteError` that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Default> Outcome<T> {
    /// Builds an envelope from a query result.
    pub fn from_result(result: Result<T>, success_message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                message: success_message.into(),
                error: None,
                data,
            },
            Err(err) => Self::failure(&err),
        }
    }

    /// Builds a failed envelope with an empty payload.
    pub fn failure(err: &RouteError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            error: Some(err.code()),
            data: T::default(),
        }
    }
}

/// Result envelope for a mutation, which has no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl Status {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(err: &RouteError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            error: Some(err.code()),
        }
    }
}

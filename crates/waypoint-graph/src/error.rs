//! Error types for route map operations.

use thiserror::Error;

/// Errors that can occur when editing or querying a route map.
///
/// Every variant is an expected outcome of bad input or graph shape, not a
/// bug. The planner facade turns these into failed envelopes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Distance must be positive, got {0}")]
    InvalidWeight(i64),

    #[error("Distance {0} is too large to store")]
    DistanceTooLarge(u64),

    #[error("City '{0}' not found in the map")]
    CityNotFound(String),

    #[error("No route between {from} and {to}")]
    RouteNotFound { from: String, to: String },

    #[error("The map has no cities")]
    EmptyGraph,

    #[error("Start and end are the same city ('{0}')")]
    SameCity(String),

    #[error("The map is not connected ({components} separate regions)")]
    Disconnected { components: usize },

    #[error("No route exists between {from} and {to}")]
    Unreachable { from: String, to: String },

    #[error("Cities are not all reachable from each other (no direct route onward from {0})")]
    NotAllReachable(String),

    #[error("No cities provided")]
    NoCitiesProvided,
}

impl RouteError {
    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidWeight(_) => "invalid_weight",
            Self::DistanceTooLarge(_) => "distance_too_large",
            Self::CityNotFound(_) => "city_not_found",
            Self::RouteNotFound { .. } => "route_not_found",
            Self::EmptyGraph => "empty_graph",
            Self::SameCity(_) => "same_city",
            Self::Disconnected { .. } => "disconnected",
            Self::Unreachable { .. } => "unreachable",
            Self::NotAllReachable(_) => "not_all_reachable",
            Self::NoCitiesProvided => "no_cities_provided",
        }
    }

    pub(crate) fn unreachable(from: &str, to: &str) -> Self {
        Self::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_city() {
        let err = RouteError::CityNotFound("Lyon".to_string());
        assert_eq!(err.to_string(), "City 'Lyon' not found in the map");
        assert_eq!(err.code(), "city_not_found");
    }

    #[test]
    fn test_disconnected_reports_regions() {
        let err = RouteError::Disconnected { components: 3 };
        assert!(err.to_string().contains("3 separate regions"));
    }
}

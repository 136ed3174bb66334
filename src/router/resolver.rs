//! Shortest-path resolution between addressed hosts

use crate::graph::algorithms::shortest_distance_dense;
use crate::graph::{HostId, Weight};
use crate::router::RouterRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// Total latency of the shortest router path
    Reachable(Weight),
    /// Unknown router, host not behind its router, or no path
    NotFound,
}

impl Distance {
    /// Numeric form of [`Distance::NotFound`]
    pub const NOT_FOUND: i64 = -1;

    pub const fn is_found(self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    /// Distance as a signed integer, `-1` when not found
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Reachable(d) => i64::try_from(d).unwrap_or(i64::MAX),
            Self::NotFound => Self::NOT_FOUND,
        }
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Self::NotFound, Self::Reachable)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Answers route queries against the registry and a router weight matrix
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    registry: &'a RouterRegistry,
    matrix: &'a [Vec<Weight>],
}

impl<'a> PathResolver<'a> {
    pub fn new(registry: &'a RouterRegistry, matrix: &'a [Vec<Weight>]) -> Self {
        Self { registry, matrix }
    }

    /// Shortest latency from `source_host` behind `source_router` to
    /// `dest_host` behind `dest_router`.
    ///
    /// Identical router identities short-circuit to zero without checking
    /// host membership.
    pub fn shortest_distance(
        &self,
        source_router: HostId,
        dest_router: HostId,
        source_host: HostId,
        dest_host: HostId,
    ) -> Distance {
        if source_router == dest_router {
            return Distance::Reachable(0);
        }

        let (Some(source), Some(dest)) = (
            self.registry.router_index_of(source_router),
            self.registry.router_index_of(dest_router),
        ) else {
            log::debug!("Unknown router in query {} -> {}", source_router, dest_router);
            return Distance::NotFound;
        };

        if !self.registry.has_member(source, source_host)
            || !self.registry.has_member(dest, dest_host)
        {
            log::debug!(
                "Host mismatch in query {}.{} -> {}.{}",
                source_router,
                source_host,
                dest_router,
                dest_host
            );
            return Distance::NotFound;
        }

        shortest_distance_dense(self.matrix, source, dest).into()
    }
}

//! Host graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod compressed;

use serde::{Deserialize, Serialize};

pub use builder::{HostGraph, HostGraphBuilder, HostIndex};
pub use compressed::ClusterForest;

/// External host identifier (the "IP" of a computer).
pub type HostId = u64;

/// Link latency. Zero is legal on host links; on router links it means "no link".
pub type Weight = u64;

/// Undirected link between two hosts, stored by dense host index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEdge {
    pub source: usize,
    pub target: usize,
    pub weight: Weight,
}

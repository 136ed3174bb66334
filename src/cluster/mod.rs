//! Host clustering module

pub mod extract;
pub mod metrics;
pub mod partition;
pub mod union_find;

use crate::graph::HostId;
use serde::{Deserialize, Serialize};

/// One tree of the partition forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster index, 0..k
    pub id: usize,

    /// Member host identifiers in traversal order
    pub members: Vec<HostId>,

    /// Size of the cluster
    pub size: usize,

    /// Member host indices, parallel to `members`
    pub vertices: Vec<usize>,
}

impl Cluster {
    /// Largest member identifier, used as the gateway identity
    pub fn max_host(&self) -> HostId {
        self.members.iter().copied().max().unwrap_or_default()
    }
}

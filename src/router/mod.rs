//! Gateway routers, one per host cluster

pub mod graph;
pub mod resolver;

use crate::cluster::Cluster;
use crate::error::{NetworkError, Result};
use crate::graph::HostId;
use std::collections::{HashMap, HashSet};

pub use graph::{RouterGraph, RouterGraphBuilder};
pub use resolver::{Distance, PathResolver};

/// Gateway router for a single cluster
#[derive(Debug, Clone)]
pub struct Router {
    /// Router index, equal to the cluster index
    pub index: usize,

    /// Gateway identity: the largest member host identifier
    pub gateway: HostId,

    /// Member hosts
    members: HashSet<HostId>,
}

impl Router {
    pub fn has_member(&self, host: HostId) -> bool {
        self.members.contains(&host)
    }

    /// Member hosts in ascending order
    pub fn sorted_members(&self) -> Vec<HostId> {
        let mut members: Vec<_> = self.members.iter().copied().collect();
        members.sort_unstable();
        members
    }
}

/// Read-only table of routers derived from the clustering
#[derive(Debug, Clone, Default)]
pub struct RouterRegistry {
    routers: Vec<Router>,

    /// Mapping from gateway identity to router index
    by_gateway: HashMap<HostId, usize>,
}

impl RouterRegistry {
    /// Create one router per cluster, in cluster order.
    ///
    /// Fails with [`NetworkError::DuplicateGateway`] if two clusters would
    /// share a gateway identity.
    pub fn from_clusters(clusters: &[Cluster]) -> Result<Self> {
        let mut routers = Vec::with_capacity(clusters.len());
        let mut by_gateway = HashMap::with_capacity(clusters.len());

        for (index, cluster) in clusters.iter().enumerate() {
            let gateway = cluster.max_host();
            if let Some(&first) = by_gateway.get(&gateway) {
                return Err(NetworkError::DuplicateGateway {
                    gateway,
                    first,
                    second: index,
                });
            }
            by_gateway.insert(gateway, index);

            log::debug!("Router {} has gateway {} and {} hosts", index, gateway, cluster.size);

            routers.push(Router {
                index,
                gateway,
                members: cluster.members.iter().copied().collect(),
            });
        }

        log::info!("Registered {} routers", routers.len());

        Ok(Self { routers, by_gateway })
    }

    pub fn gateway_of(&self, index: usize) -> Option<HostId> {
        self.routers.get(index).map(|r| r.gateway)
    }

    /// Whether `host` belongs to the cluster behind router `index`
    pub fn has_member(&self, index: usize, host: HostId) -> bool {
        self.routers.get(index).is_some_and(|r| r.has_member(host))
    }

    pub fn router_index_of(&self, gateway: HostId) -> Option<usize> {
        self.by_gateway.get(&gateway).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Router> {
        self.routers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Router> {
        self.routers.iter()
    }

    pub fn len(&self) -> usize {
        self.routers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }
}

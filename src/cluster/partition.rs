//! Kruskal-style k-clustering of the host graph

use crate::cluster::union_find::DisjointSets;
use crate::error::{NetworkError, Result};
use crate::graph::{ClusterForest, HostEdge, HostGraph, Weight};
use itertools::Itertools;

/// Spanning forest cut at exactly `cluster_count` trees
#[derive(Debug, Clone)]
pub struct Partition {
    /// Forest adjacency over host indices
    pub forest: ClusterForest,

    /// Forest edges in acceptance order
    pub accepted: Vec<HostEdge>,

    /// Number of trees in the forest
    pub cluster_count: usize,
}

impl Partition {
    /// Total weight of the spanning forest, saturating at `Weight::MAX`
    pub fn forest_weight(&self) -> Weight {
        self.accepted.iter().map(|e| e.weight).fold(0, Weight::saturating_add)
    }
}

/// Grow a minimum spanning forest until exactly `k` components remain.
///
/// Links are considered cheapest first, ties in input order. Fails with
/// [`NetworkError::InvalidClusterCount`] unless `1 <= k <= hosts` and with
/// [`NetworkError::UnderPartitioned`] if the links run out first.
pub fn partition(graph: &HostGraph, k: usize) -> Result<Partition> {
    let node_count = graph.host_count();
    if k < 1 || k > node_count {
        return Err(NetworkError::InvalidClusterCount {
            requested: k,
            hosts: node_count,
        });
    }

    log::info!(
        "Partitioning {} hosts into {} clusters using {} links",
        node_count,
        k,
        graph.edges.len()
    );

    // sorted_by_key is stable, so equal weights keep input order
    let mut sorted = graph.edges.iter().sorted_by_key(|e| e.weight);

    let mut sets = DisjointSets::new(node_count);
    let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); node_count];
    let mut accepted = Vec::with_capacity(node_count - k);

    while sets.component_count() > k {
        let Some(edge) = sorted.next() else {
            return Err(NetworkError::UnderPartitioned {
                components: sets.component_count(),
                target: k,
            });
        };

        if sets.union(edge.source, edge.target) {
            adjacency[edge.source].push(edge.target as u32);
            adjacency[edge.target].push(edge.source as u32);
            accepted.push(*edge);
        }
    }

    log::info!(
        "Accepted {} forest links, {} components remain",
        accepted.len(),
        sets.component_count()
    );

    Ok(Partition {
        forest: ClusterForest::from_adjacency(&adjacency),
        accepted,
        cluster_count: k,
    })
}

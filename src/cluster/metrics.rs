//! Cluster statistics and metrics

use crate::cluster::partition::Partition;
use crate::cluster::Cluster;
use crate::graph::{HostGraph, Weight};
use serde::{Deserialize, Serialize};

/// Per-cluster forest statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMetrics {
    pub cluster: usize,
    pub size: usize,
    pub forest_edges: usize,
    pub forest_weight: Weight,
}

/// Map every host index to the cluster that contains it
pub fn cluster_assignment(clusters: &[Cluster], host_count: usize) -> Vec<usize> {
    let mut assignment = vec![usize::MAX; host_count];
    for cluster in clusters {
        for &v in &cluster.vertices {
            assignment[v] = cluster.id;
        }
    }
    assignment
}

/// Calculate forest statistics for each cluster
pub fn calculate_cluster_metrics(
    partition: &Partition,
    clusters: &[Cluster],
) -> Vec<ClusterMetrics> {
    let assignment = cluster_assignment(clusters, partition.forest.node_count);

    let mut metrics: Vec<ClusterMetrics> = clusters
        .iter()
        .map(|c| ClusterMetrics {
            cluster: c.id,
            size: c.size,
            forest_edges: 0,
            forest_weight: 0,
        })
        .collect();

    for edge in &partition.accepted {
        // both endpoints share a cluster by construction
        if let Some(m) = metrics.get_mut(assignment[edge.source]) {
            m.forest_edges += 1;
            m.forest_weight = m.forest_weight.saturating_add(edge.weight);
        }
    }

    metrics
}

/// Spacing of the clustering: the cheapest host link joining two clusters.
///
/// `None` when every link stays within a cluster.
pub fn spacing(graph: &HostGraph, clusters: &[Cluster]) -> Option<Weight> {
    let assignment = cluster_assignment(clusters, graph.host_count());
    graph
        .edges
        .iter()
        .filter(|e| assignment[e.source] != assignment[e.target])
        .map(|e| e.weight)
        .min()
}

//! Grouping of forest trees into cluster membership lists

use crate::cluster::partition::Partition;
use crate::cluster::Cluster;
use crate::error::{NetworkError, Result};
use crate::graph::algorithms::preorder_traversal;
use crate::graph::HostIndex;

/// Split the partition forest into its clusters.
///
/// Cluster `i` is rooted at the lowest-indexed host not reached by clusters
/// `0..i`; an isolated host roots a singleton cluster. Members are listed in
/// depth-first pre-order from the root. Fails if fewer than
/// `partition.cluster_count` trees exist or if a host is left unvisited.
pub fn extract_clusters(partition: &Partition, index: &HostIndex) -> Result<Vec<Cluster>> {
    let forest = &partition.forest;
    let mut visited = vec![false; forest.node_count];
    let mut clusters = Vec::with_capacity(partition.cluster_count);

    // Roots are found in increasing index order, so the scan never restarts
    let mut cursor = 0;

    for id in 0..partition.cluster_count {
        while cursor < visited.len() && visited[cursor] {
            cursor += 1;
        }
        if cursor == visited.len() {
            return Err(NetworkError::EmptyCluster { cluster: id });
        }

        let vertices = preorder_traversal(forest, cursor, &mut visited);
        let members = vertices
            .iter()
            .map(|&v| index.host_id(v).ok_or(NetworkError::EmptyCluster { cluster: id }))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Cluster {} rooted at host {} has {} members", id, members[0], members.len());

        clusters.push(Cluster {
            id,
            size: members.len(),
            members,
            vertices,
        });
    }

    if let Some(unvisited) = visited.iter().position(|&seen| !seen) {
        return Err(NetworkError::UnvisitedHost {
            host: index.host_id(unvisited).unwrap_or_default(),
        });
    }

    Ok(clusters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::partition::partition;
    use crate::graph::{ClusterForest, HostGraph};

    #[test]
    fn square_splits_into_two_pairs() {
        let graph: HostGraph = [(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 5)]
            .into_iter()
            .collect();
        let partition = partition(&graph, 2).unwrap();
        let clusters = extract_clusters(&partition, &graph.index).unwrap();
        let members: Vec<_> = clusters.iter().map(|c| c.members.clone()).collect();
        assert_eq!(members, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn isolated_hosts_form_singletons() {
        // host 5 (index 0) only has an expensive link and stays alone
        let graph: HostGraph = [(5, 1, 100), (1, 2, 1), (2, 3, 1)].into_iter().collect();
        let partition = partition(&graph, 2).unwrap();
        let clusters = extract_clusters(&partition, &graph.index).unwrap();
        assert_eq!(clusters[0].members, vec![5]);
        assert_eq!(clusters[1].members, vec![1, 2, 3]);
        assert_eq!(clusters[1].size, 3);
    }

    #[test]
    fn members_follow_preorder() {
        let graph: HostGraph = [(10, 20, 1), (10, 30, 2), (20, 40, 3)]
            .into_iter()
            .collect();
        let partition = partition(&graph, 1).unwrap();
        let clusters = extract_clusters(&partition, &graph.index).unwrap();
        assert_eq!(clusters[0].members, vec![10, 20, 40, 30]);
        assert_eq!(clusters[0].vertices, vec![0, 1, 3, 2]);
    }

    #[test]
    fn too_few_trees_is_reported() {
        let graph: HostGraph = [(1, 2, 1)].into_iter().collect();
        let partition = Partition {
            forest: ClusterForest::from_adjacency(&[vec![1], vec![0]]),
            accepted: Vec::new(),
            cluster_count: 2,
        };
        assert_eq!(
            extract_clusters(&partition, &graph.index).unwrap_err(),
            NetworkError::EmptyCluster { cluster: 1 }
        );
    }

    #[test]
    fn too_many_trees_is_reported() {
        let graph: HostGraph = [(1, 2, 1), (3, 4, 1)].into_iter().collect();
        let partition = Partition {
            forest: ClusterForest::from_adjacency(&[vec![1], vec![0], vec![], vec![]]),
            accepted: Vec::new(),
            cluster_count: 2,
        };
        assert_eq!(
            extract_clusters(&partition, &graph.index).unwrap_err(),
            NetworkError::UnvisitedHost { host: 4 }
        );
    }
}

//! Compact adjacency representation of the clustering forest

use serde::{Deserialize, Serialize};

/// Spanning forest over host indices in compressed sparse form.
///
/// Each undirected forest edge is stored on both endpoints. Neighbour order
/// within a vertex is the order in which edges were accepted, which fixes the
/// depth-first visitation order used to list cluster members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterForest {
    /// Number of host vertices
    pub node_count: usize,

    /// Offset array: offsets[i] to offsets[i+1] defines the neighbour range for vertex i
    pub offsets: Vec<u32>,

    /// Concatenated neighbour lists
    pub edges: Vec<u32>,
}

impl ClusterForest {
    /// Compress per-vertex adjacency lists without reordering them
    pub fn from_adjacency(adjacency: &[Vec<u32>]) -> Self {
        let edge_count: usize = adjacency.iter().map(Vec::len).sum();

        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        offsets.push(0);
        let mut offset = 0u32;
        for list in adjacency {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        let mut edges = Vec::with_capacity(edge_count);
        for list in adjacency {
            edges.extend_from_slice(list);
        }

        Self {
            node_count: adjacency.len(),
            offsets,
            edges,
        }
    }

    /// Forest neighbours of a vertex
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    pub fn degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Number of undirected forest edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_order_is_preserved() {
        let forest = ClusterForest::from_adjacency(&[vec![2, 1], vec![0], vec![0], vec![]]);
        assert_eq!(forest.node_count, 4);
        assert_eq!(forest.neighbors(0), &[2, 1]);
        assert_eq!(forest.neighbors(3), &[] as &[u32]);
        assert_eq!(forest.degree(0), 2);
        assert_eq!(forest.degree(3), 0);
        assert_eq!(forest.edge_count(), 2);
    }
}

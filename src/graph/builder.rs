//! Host graph construction module

use crate::graph::{HostEdge, HostId, Weight};
use std::collections::HashMap;

/// Mapping between external host identifiers and dense vertex indices,
/// assigned in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct HostIndex {
    /// Mapping from host identifiers to vertex indices
    id_to_index: HashMap<HostId, usize>,

    /// Host identifiers by vertex index
    host_ids: Vec<HostId>,
}

impl HostIndex {
    /// Create an empty index with room for `capacity` hosts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            host_ids: Vec::with_capacity(capacity),
        }
    }

    /// Get or assign the vertex index for a host
    pub fn index_of(&mut self, id: HostId) -> usize {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.host_ids.len();
        self.id_to_index.insert(id, idx);
        self.host_ids.push(id);

        idx
    }

    /// Look up a host without assigning a new index
    pub fn get(&self, id: HostId) -> Option<usize> {
        self.id_to_index.get(&id).copied()
    }

    /// External identifier of the host at `index`
    pub fn host_id(&self, index: usize) -> Option<HostId> {
        self.host_ids.get(index).copied()
    }

    /// Host identifiers in index order
    pub fn host_ids(&self) -> &[HostId] {
        &self.host_ids
    }

    /// Number of distinct hosts seen so far
    pub fn size(&self) -> usize {
        self.host_ids.len()
    }
}

/// Host index plus the raw host link list, in input order.
#[derive(Debug, Clone, Default)]
pub struct HostGraph {
    pub index: HostIndex,
    pub edges: Vec<HostEdge>,
}

impl HostGraph {
    /// Number of distinct hosts
    pub fn host_count(&self) -> usize {
        self.index.size()
    }
}

/// Builder for incrementally constructing a [`HostGraph`]
pub struct HostGraphBuilder {
    index: HostIndex,
    edges: Vec<HostEdge>,
}

impl HostGraphBuilder {
    /// Create a new builder sized for `edge_count` links
    pub fn with_capacity(edge_count: usize) -> Self {
        Self {
            // Every link introduces at most two new hosts
            index: HostIndex::with_capacity(edge_count.saturating_mul(2)),
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Add an undirected link between two hosts
    pub fn add_edge(&mut self, source: HostId, target: HostId, weight: Weight) {
        let source = self.index.index_of(source);
        let target = self.index.index_of(target);

        self.edges.push(HostEdge {
            source,
            target,
            weight,
        });
    }

    /// Build the host graph
    pub fn build(self) -> HostGraph {
        log::info!(
            "Built host graph with {} hosts and {} links",
            self.index.size(),
            self.edges.len()
        );

        HostGraph {
            index: self.index,
            edges: self.edges,
        }
    }
}

impl FromIterator<(HostId, HostId, Weight)> for HostGraph {
    fn from_iter<I: IntoIterator<Item = (HostId, HostId, Weight)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut builder = HostGraphBuilder::with_capacity(iter.size_hint().0);
        for (source, target, weight) in iter {
            builder.add_edge(source, target, weight);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_first_appearance() {
        let mut index = HostIndex::default();
        assert_eq!(index.index_of(40), 0);
        assert_eq!(index.index_of(7), 1);
        assert_eq!(index.index_of(40), 0);
        assert_eq!(index.index_of(12), 2);
        assert_eq!(index.size(), 3);
        assert_eq!(index.host_ids(), &[40, 7, 12]);
        assert_eq!(index.get(12), Some(2));
        assert_eq!(index.get(99), None);
    }

    #[test]
    fn builder_keeps_duplicate_links() {
        let graph: HostGraph = [(1, 2, 3), (2, 1, 3), (2, 5, 0)].into_iter().collect();
        assert_eq!(graph.host_count(), 3);
        assert_eq!(graph.edges.len(), 3);
        assert_eq!(
            graph.edges[1],
            HostEdge {
                source: 1,
                target: 0,
                weight: 3
            }
        );
    }

    #[test]
    fn index_has_no_fixed_ceiling() {
        // One declared link, but more hosts than links are fine
        let mut builder = HostGraphBuilder::with_capacity(1);
        builder.add_edge(1, 2, 1);
        builder.add_edge(3, 4, 1);
        builder.add_edge(5, 6, 1);
        assert_eq!(builder.build().host_count(), 6);
    }
}

//! Weighted graph of inter-router links

use crate::error::{NetworkError, Result};
use crate::graph::{HostId, Weight};
use crate::router::RouterRegistry;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected router graph; node `i` is router `i` of the registry.
#[derive(Debug, Clone, Default)]
pub struct RouterGraph {
    graph: UnGraph<HostId, Weight>,
}

impl RouterGraph {
    pub fn router_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Links as `(gateway, gateway, weight)` in the order they were added
    pub fn links(&self) -> Vec<(HostId, HostId, Weight)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()], *e.weight()))
            .collect()
    }

    /// Dense weight matrix indexed by router index.
    ///
    /// When several links join the same pair of routers, the one added last
    /// wins. Zero entries mean "no link".
    pub fn weight_matrix(&self) -> Vec<Vec<Weight>> {
        let n = self.graph.node_count();
        let mut matrix = vec![vec![0; n]; n];

        for edge in self.graph.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            matrix[a][b] = *edge.weight();
            matrix[b][a] = *edge.weight();
        }

        matrix
    }

    /// Number of connected components among routers
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }
}

/// Builder resolving gateway identities through the router registry
pub struct RouterGraphBuilder<'a> {
    registry: &'a RouterRegistry,
    graph: UnGraph<HostId, Weight>,
}

impl<'a> RouterGraphBuilder<'a> {
    /// Start a graph with one node per registered router
    pub fn new(registry: &'a RouterRegistry) -> Self {
        let mut graph = UnGraph::with_capacity(registry.len(), 0);
        for router in registry.iter() {
            graph.add_node(router.gateway);
        }
        Self { registry, graph }
    }

    fn resolve(&self, gateway: HostId) -> Result<NodeIndex> {
        self.registry
            .router_index_of(gateway)
            .map(NodeIndex::new)
            .ok_or(NetworkError::UnknownRouter { gateway })
    }

    /// Add a symmetric link between two gateways
    pub fn add_edge(&mut self, a: HostId, b: HostId, weight: Weight) -> Result<()> {
        let source = self.resolve(a)?;
        let target = self.resolve(b)?;

        if source == target {
            log::warn!("Router link {} -> {} is a self-loop", a, b);
        }
        if weight == 0 {
            log::warn!("Router link {} -> {} has zero weight and will never be used", a, b);
        }

        self.graph.add_edge(source, target, weight);
        Ok(())
    }

    /// Build the router graph
    pub fn build(self) -> RouterGraph {
        log::info!(
            "Built router graph with {} routers and {} links",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        RouterGraph { graph: self.graph }
    }
}

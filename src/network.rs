//! Two-tier host/router network: build once, query many times

use crate::address::RouteQuery;
use crate::cluster::extract::extract_clusters;
use crate::cluster::metrics::{self, ClusterMetrics};
use crate::cluster::partition::{partition, Partition};
use crate::cluster::Cluster;
use crate::config::Config;
use crate::error::{NetworkError, Result};
use crate::graph::{HostGraph, HostId, Weight};
use crate::router::{Distance, PathResolver, RouterGraph, RouterGraphBuilder, RouterRegistry};
use rayon::prelude::*;
use serde::Serialize;

/// Clustering result and the routers derived from it
#[derive(Debug, Clone)]
struct Topology {
    partition: Partition,
    clusters: Vec<Cluster>,
    registry: RouterRegistry,
}

/// Router graph plus its dense weight matrix
#[derive(Debug, Clone)]
struct Backbone {
    graph: RouterGraph,
    matrix: Vec<Vec<Weight>>,
}

/// Headline numbers describing a built network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub host_count: usize,
    pub host_link_count: usize,
    pub cluster_count: usize,
    pub forest_weight: Weight,
    pub spacing: Option<Weight>,
    pub router_link_count: usize,
    pub router_components: usize,
}

/// Host network partitioned into clusters behind gateway routers.
///
/// Build phases must run in order: [`Network::build_host_graph`], then
/// [`Network::partition_and_register_routers`], then
/// [`Network::build_router_graph`]. Queries are answered afterwards from
/// read-only state, so a built network can be shared across threads.
#[derive(Debug, Clone)]
pub struct Network {
    parallel_query_threshold: usize,
    hosts: Option<HostGraph>,
    topology: Option<Topology>,
    backbone: Option<Backbone>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Network {
    pub fn new(config: &Config) -> Self {
        Self {
            parallel_query_threshold: config.parallel_query_threshold,
            hosts: None,
            topology: None,
            backbone: None,
        }
    }

    /// Record the host links and index their endpoints
    pub fn build_host_graph<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (HostId, HostId, Weight)>,
    {
        if self.hosts.is_some() {
            return Err(NetworkError::AlreadyBuilt { phase: "host graph" });
        }
        self.hosts = Some(edges.into_iter().collect());
        Ok(())
    }

    /// Cluster the hosts into `k` groups and register one router per group.
    ///
    /// On failure the network is left unchanged.
    pub fn partition_and_register_routers(&mut self, k: usize) -> Result<()> {
        let hosts = self.hosts.as_ref().ok_or(NetworkError::OutOfOrder {
            operation: "partitioning",
            requires: "the host graph",
        })?;
        if self.topology.is_some() {
            return Err(NetworkError::AlreadyBuilt { phase: "router registry" });
        }

        let partition = partition(hosts, k)?;
        let clusters = extract_clusters(&partition, &hosts.index)?;
        let registry = RouterRegistry::from_clusters(&clusters)?;

        self.topology = Some(Topology {
            partition,
            clusters,
            registry,
        });
        Ok(())
    }

    /// Connect gateways with weighted links
    pub fn build_router_graph<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (HostId, HostId, Weight)>,
    {
        let topology = self.topology.as_ref().ok_or(NetworkError::OutOfOrder {
            operation: "building the router graph",
            requires: "the router registry",
        })?;
        if self.backbone.is_some() {
            return Err(NetworkError::AlreadyBuilt { phase: "router graph" });
        }

        let mut builder = RouterGraphBuilder::new(&topology.registry);
        for (a, b, weight) in edges {
            builder.add_edge(a, b, weight)?;
        }
        let graph = builder.build();
        let matrix = graph.weight_matrix();

        self.backbone = Some(Backbone { graph, matrix });
        Ok(())
    }

    fn resolver(&self) -> Result<PathResolver<'_>> {
        match (&self.topology, &self.backbone) {
            (Some(topology), Some(backbone)) => {
                Ok(PathResolver::new(&topology.registry, &backbone.matrix))
            }
            _ => Err(NetworkError::OutOfOrder {
                operation: "querying",
                requires: "the router graph",
            }),
        }
    }

    /// Shortest latency between two addressed hosts
    pub fn shortest_distance(
        &self,
        source_router: HostId,
        dest_router: HostId,
        source_host: HostId,
        dest_host: HostId,
    ) -> Result<Distance> {
        Ok(self
            .resolver()?
            .shortest_distance(source_router, dest_router, source_host, dest_host))
    }

    /// Answer a `"router.host router.host"` query
    pub fn query(&self, token: &str) -> Result<Distance> {
        let resolver = self.resolver()?;
        let query: RouteQuery = token.parse()?;
        let distance = resolver.shortest_distance(
            query.source.router,
            query.dest.router,
            query.source.host,
            query.dest.host,
        );
        log::debug!("{} -> {}", query, distance);
        Ok(distance)
    }

    /// Answer independent queries, in parallel for large batches.
    ///
    /// Results keep the input order; the first malformed query fails the batch.
    pub fn query_batch<S>(&self, tokens: &[S]) -> Result<Vec<Distance>>
    where
        S: AsRef<str> + Sync,
    {
        if tokens.len() >= self.parallel_query_threshold {
            log::info!("Answering {} queries in parallel", tokens.len());
            tokens.par_iter().map(|t| self.query(t.as_ref())).collect()
        } else {
            tokens.iter().map(|t| self.query(t.as_ref())).collect()
        }
    }

    pub fn host_graph(&self) -> Option<&HostGraph> {
        self.hosts.as_ref()
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.topology.as_ref().map(|t| &t.partition)
    }

    pub fn clusters(&self) -> &[Cluster] {
        self.topology.as_ref().map_or(&[][..], |t| t.clusters.as_slice())
    }

    pub fn registry(&self) -> Option<&RouterRegistry> {
        self.topology.as_ref().map(|t| &t.registry)
    }

    pub fn router_graph(&self) -> Option<&RouterGraph> {
        self.backbone.as_ref().map(|b| &b.graph)
    }

    /// Forest statistics per cluster
    pub fn cluster_metrics(&self) -> Vec<ClusterMetrics> {
        self.topology
            .as_ref()
            .map(|t| metrics::calculate_cluster_metrics(&t.partition, &t.clusters))
            .unwrap_or_default()
    }

    /// Summary of every phase built so far
    pub fn summary(&self) -> NetworkSummary {
        let (host_count, host_link_count) = self
            .hosts
            .as_ref()
            .map_or((0, 0), |h| (h.host_count(), h.edges.len()));

        let (cluster_count, forest_weight, spacing) = match (&self.hosts, &self.topology) {
            (Some(hosts), Some(t)) => (
                t.clusters.len(),
                t.partition.forest_weight(),
                metrics::spacing(hosts, &t.clusters),
            ),
            _ => (0, 0, None),
        };

        let (router_link_count, router_components) = self
            .backbone
            .as_ref()
            .map_or((0, 0), |b| (b.graph.edge_count(), b.graph.component_count()));

        NetworkSummary {
            host_count,
            host_link_count,
            cluster_count,
            forest_weight,
            spacing,
            router_link_count,
            router_components,
        }
    }
}

//! Searching graphs built with [`petgraph`].

use crate::search::GraphSpec;
use itertools::Itertools;
use petgraph::{
    graph::{IndexType, NodeIndex},
    EdgeType, Graph,
};
use std::fmt;

type Heuristic = Box<dyn Fn(NodeIndex, NodeIndex) -> f64 + Send + Sync>;

/// A [`GraphSpec`] over a [`petgraph::Graph`] whose edge weights are the edge
/// costs. When there are parallel edges the cheapest one is used.
pub struct PetgraphSpec<'a, N, E, Ty, Ix = petgraph::graph::DefaultIx>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    graph: &'a Graph<N, E, Ty, Ix>,
    heuristic: Option<Heuristic>,
}

impl<'a, N, E, Ty, Ix> PetgraphSpec<'a, N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    pub fn new(graph: &'a Graph<N, E, Ty, Ix>) -> Self {
        Self {
            graph,
            heuristic: None,
        }
    }

    /// Use `heuristic` to estimate the cost between two nodes; see
    /// [`GraphSpec::heuristic`] for what it must satisfy.
    pub fn with_heuristic(
        mut self,
        heuristic: impl Fn(NodeIndex, NodeIndex) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

impl<N, E, Ty, Ix> fmt::Debug for PetgraphSpec<'_, N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PetgraphSpec")
            .field("node_count", &self.graph.node_count())
            .field("edge_count", &self.graph.edge_count())
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl<N, E, Ty> GraphSpec<NodeIndex> for PetgraphSpec<'_, N, E, Ty>
where
    E: Copy + Into<f64>,
    Ty: EdgeType,
{
    fn neighbors(&self, node: &NodeIndex) -> Vec<NodeIndex> {
        // petgraph lists the most recently added edge first
        self.graph
            .neighbors(*node)
            .collect_vec()
            .into_iter()
            .rev()
            .unique()
            .collect()
    }

    fn cost(&self, a: &NodeIndex, b: &NodeIndex) -> f64 {
        self.graph
            .edges_connecting(*a, *b)
            .map(|edge| (*edge.weight()).into())
            .fold(f64::INFINITY, f64::min)
    }

    fn heuristic(&self, a: &NodeIndex, b: &NodeIndex) -> f64 {
        self.heuristic
            .as_ref()
            .map_or(0., |heuristic| heuristic(*a, *b))
    }
}

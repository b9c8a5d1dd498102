//! Dijkstra's algorithm: shortest paths from a start node to every node it
//! can reach.

use crate::search::{
    search_core::SearchCore, DijkstraMultiPathSearch, DijkstraSearch, GraphSpec,
    MultiPathSearcher, SinglePathSearcher,
};
use std::hash::Hash;

/// Dijkstra search that keeps one shortest path per reachable node. The
/// graph's heuristic is never consulted.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> Dijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Explore everything reachable from `start`.
    pub fn search<T>(&self, start: T) -> DijkstraSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let core = SearchCore::new(self.graph, start, None);
        DijkstraSearch::new(SinglePathSearcher::new(core).run())
    }
}

/// Dijkstra search that keeps every shortest path to every reachable node.
#[derive(Debug, Clone, Copy)]
pub struct DijkstraMultiPath<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> DijkstraMultiPath<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Explore everything reachable from `start`.
    pub fn search<T>(&self, start: T) -> DijkstraMultiPathSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let core = SearchCore::new(self.graph, start, None);
        DijkstraMultiPathSearch::new(MultiPathSearcher::new(core).run())
    }
}

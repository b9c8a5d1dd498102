//! A* search from a start node to the nearest of a set of goals.

use crate::search::{
    search_core::{goal_set, SearchCore},
    AStarMultiPathSearch, AStarSearch, GraphSpec, MultiPathSearcher, SearchError,
    SinglePathSearcher,
};
use std::{collections::HashSet, hash::Hash};

/// A* search that returns one shortest path to the nearest goal.
///
/// The graph's [`GraphSpec::heuristic`] guides the search; with an admissible
/// heuristic the path returned is optimal.
#[derive(Debug, Clone, Copy)]
pub struct AStar<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> AStar<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Search from `start` to the nearest of `goals`. Fails if `goals` is
    /// empty; an unreachable goal set is not an error and results in an
    /// empty result.
    pub fn search<T>(
        &self,
        start: T,
        goals: impl IntoIterator<Item = T>,
    ) -> Result<AStarSearch<T>, SearchError>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let goals = goal_set(goals)?;
        Ok(self.run(start, goals))
    }

    /// Search from `start` to a single goal.
    pub fn search_goal<T>(&self, start: T, goal: T) -> AStarSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        self.run(start, HashSet::from([goal]))
    }

    fn run<T>(&self, start: T, goals: HashSet<T>) -> AStarSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let core = SearchCore::new(self.graph, start, Some(goals));
        AStarSearch::new(SinglePathSearcher::new(core).run())
    }
}

/// A* search that returns every nearest goal and every shortest path to them.
#[derive(Debug, Clone, Copy)]
pub struct AStarMultiPath<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> AStarMultiPath<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Search from `start` to the nearest of `goals`, finding every goal tied
    /// for nearest. Fails if `goals` is empty.
    pub fn search<T>(
        &self,
        start: T,
        goals: impl IntoIterator<Item = T>,
    ) -> Result<AStarMultiPathSearch<T>, SearchError>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let goals = goal_set(goals)?;
        Ok(self.run(start, goals))
    }

    /// Search from `start` to a single goal.
    pub fn search_goal<T>(&self, start: T, goal: T) -> AStarMultiPathSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        self.run(start, HashSet::from([goal]))
    }

    fn run<T>(&self, start: T, goals: HashSet<T>) -> AStarMultiPathSearch<T>
    where
        T: Clone + Eq + Hash,
        G: GraphSpec<T>,
    {
        let core = SearchCore::new(self.graph, start, Some(goals));
        AStarMultiPathSearch::new(MultiPathSearcher::new(core).run())
    }
}

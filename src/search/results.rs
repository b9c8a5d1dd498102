//! Read-only views over finished searches.
//!
//! Dijkstra-style results answer questions about arbitrary targets, while
//! A*-style results answer questions about the nearest goal(s). Each concrete
//! result type implements the traits of exactly one family, so code that is
//! generic over [`DijkstraSearchResult`] can never be handed an A* result and
//! vice versa, even though both are backed by the same search machinery.

use crate::search::{multi_path::MultiPathOutcome, single_path::SinglePathOutcome};
use std::{collections::HashSet, hash::Hash};

/// The result of a search from a start node to every reachable node.
pub trait DijkstraSearchResult<T> {
    fn start(&self) -> &T;

    /// Number of nodes examined during the search, including the start node.
    fn num_nodes_examined(&self) -> usize;

    /// Cost of the shortest path from the start to `target`, or
    /// [`f64::INFINITY`] if `target` is unreachable. 0 for the start itself.
    fn shortest_path_cost(&self, target: &T) -> f64;

    /// One shortest path from the start to `target`, with the start as the
    /// first element and `target` as the last, or `None` if `target` is
    /// unreachable. The path from the start to itself is `[start]`.
    fn shortest_path(&self, target: &T) -> Option<Vec<T>>;

    /// Every node reached from the start through at least one edge.
    fn reachable_nodes(&self) -> HashSet<T>;
}

/// A [`DijkstraSearchResult`] that also knows every shortest path.
pub trait DijkstraMultiPathResult<T>: DijkstraSearchResult<T> {
    /// All shortest paths from the start to `target`, or `None` if `target`
    /// is unreachable.
    fn shortest_paths(&self, target: &T) -> Option<HashSet<Vec<T>>>;
}

/// The result of a search from a start node to the nearest of a set of goals.
pub trait AStarSearchResult<T> {
    fn start(&self) -> &T;

    /// Number of nodes examined during the search, including the start node.
    fn num_nodes_examined(&self) -> usize;

    /// The nearest goal found, or `None` if no goal is reachable.
    fn reached_goal(&self) -> Option<&T>;

    /// Cost of the shortest path to the nearest goal, or [`f64::INFINITY`] if
    /// no goal is reachable.
    fn shortest_path_cost(&self) -> f64;

    /// A shortest path from the start to the nearest goal, or `None` if no
    /// goal is reachable.
    fn shortest_path(&self) -> Option<Vec<T>>;
}

/// An [`AStarSearchResult`] that also knows every nearest goal and every
/// shortest path to them.
pub trait AStarMultiPathResult<T>: AStarSearchResult<T> {
    /// All goals at the shortest distance from the start, or `None` if no goal
    /// is reachable.
    fn reached_goals(&self) -> Option<HashSet<T>>;

    /// Every shortest path to any of the [`reached_goals`], or `None` if no
    /// goal is reachable.
    ///
    /// [`reached_goals`]: AStarMultiPathResult::reached_goals
    fn shortest_paths(&self) -> Option<HashSet<Vec<T>>>;
}

/// Result of [`Dijkstra::search`](crate::search::Dijkstra::search).
#[derive(Debug, Clone)]
pub struct DijkstraSearch<T> {
    outcome: SinglePathOutcome<T>,
}

impl<T> DijkstraSearch<T> {
    pub(crate) fn new(outcome: SinglePathOutcome<T>) -> Self {
        Self { outcome }
    }
}

impl<T> DijkstraSearchResult<T> for DijkstraSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn start(&self) -> &T {
        &self.outcome.start
    }

    fn num_nodes_examined(&self) -> usize {
        self.outcome.num_nodes_examined
    }

    fn shortest_path_cost(&self, target: &T) -> f64 {
        self.outcome.shortest_path_cost(target)
    }

    fn shortest_path(&self, target: &T) -> Option<Vec<T>> {
        self.outcome.shortest_path(target)
    }

    fn reachable_nodes(&self) -> HashSet<T> {
        self.outcome.reachable_nodes()
    }
}

/// Result of [`DijkstraMultiPath::search`](crate::search::DijkstraMultiPath::search).
#[derive(Debug, Clone)]
pub struct DijkstraMultiPathSearch<T> {
    outcome: MultiPathOutcome<T>,
}

impl<T> DijkstraMultiPathSearch<T> {
    pub(crate) fn new(outcome: MultiPathOutcome<T>) -> Self {
        Self { outcome }
    }
}

impl<T> DijkstraSearchResult<T> for DijkstraMultiPathSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn start(&self) -> &T {
        &self.outcome.start
    }

    fn num_nodes_examined(&self) -> usize {
        self.outcome.num_nodes_examined
    }

    fn shortest_path_cost(&self, target: &T) -> f64 {
        self.outcome.shortest_path_cost(target)
    }

    fn shortest_path(&self, target: &T) -> Option<Vec<T>> {
        self.outcome.shortest_path(target)
    }

    fn reachable_nodes(&self) -> HashSet<T> {
        self.outcome.reachable_nodes()
    }
}

impl<T> DijkstraMultiPathResult<T> for DijkstraMultiPathSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn shortest_paths(&self, target: &T) -> Option<HashSet<Vec<T>>> {
        self.outcome.shortest_paths(target)
    }
}

/// Result of [`AStar::search`](crate::search::AStar::search).
#[derive(Debug, Clone)]
pub struct AStarSearch<T> {
    outcome: SinglePathOutcome<T>,
}

impl<T> AStarSearch<T> {
    pub(crate) fn new(outcome: SinglePathOutcome<T>) -> Self {
        Self { outcome }
    }
}

impl<T> AStarSearchResult<T> for AStarSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn start(&self) -> &T {
        &self.outcome.start
    }

    fn num_nodes_examined(&self) -> usize {
        self.outcome.num_nodes_examined
    }

    fn reached_goal(&self) -> Option<&T> {
        self.outcome.reached_goal()
    }

    fn shortest_path_cost(&self) -> f64 {
        self.outcome.shortest_path_cost_to_goal()
    }

    fn shortest_path(&self) -> Option<Vec<T>> {
        self.outcome.shortest_path_to_goal()
    }
}

/// Result of [`AStarMultiPath::search`](crate::search::AStarMultiPath::search).
#[derive(Debug, Clone)]
pub struct AStarMultiPathSearch<T> {
    outcome: MultiPathOutcome<T>,
}

impl<T> AStarMultiPathSearch<T> {
    pub(crate) fn new(outcome: MultiPathOutcome<T>) -> Self {
        Self { outcome }
    }
}

impl<T> AStarSearchResult<T> for AStarMultiPathSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn start(&self) -> &T {
        &self.outcome.start
    }

    fn num_nodes_examined(&self) -> usize {
        self.outcome.num_nodes_examined
    }

    fn reached_goal(&self) -> Option<&T> {
        self.outcome.reached_goal()
    }

    fn shortest_path_cost(&self) -> f64 {
        self.outcome.shortest_path_cost_to_goal()
    }

    fn shortest_path(&self) -> Option<Vec<T>> {
        self.outcome.shortest_path_to_goal()
    }
}

impl<T> AStarMultiPathResult<T> for AStarMultiPathSearch<T>
where
    T: Clone + Eq + Hash,
{
    fn reached_goals(&self) -> Option<HashSet<T>> {
        self.outcome.reached_goal_set()
    }

    fn shortest_paths(&self) -> Option<HashSet<Vec<T>>> {
        self.outcome.shortest_paths_to_goals()
    }
}

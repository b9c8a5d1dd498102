//! State and helpers shared by the single-path and multi-path searchers.
//!
//! A search has two phases. A [`SearchCore`] borrows the graph and holds the
//! mutable search state; it is consumed by exactly one searcher's `run`,
//! which returns a [`SearchOutcome`]. The outcome owns everything the result
//! accessors need and no longer refers to the graph, so it can be kept around
//! and read from any number of threads.

use crate::search::{Frontier, GraphSpec, SearchError, SearchStatistics};
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// One candidate edge out of the node being expanded.
#[derive(Debug, Clone)]
pub(crate) struct Relaxation<T> {
    /// The neighbour reached by the edge
    pub next: T,
    /// Distance to `next` when going through the expanded node
    pub alt_cost: f64,
    /// Best distance to `next` known before this edge was considered
    pub known_cost: f64,
}

/// Collect the goals of a search, rejecting an empty collection.
pub(crate) fn goal_set<T>(goals: impl IntoIterator<Item = T>) -> Result<HashSet<T>, SearchError>
where
    T: Eq + Hash,
{
    let goals: HashSet<T> = goals.into_iter().collect();
    if goals.is_empty() {
        return Err(SearchError::EmptyGoals);
    }
    Ok(goals)
}

pub(crate) struct SearchCore<'g, T, G>
where
    T: Hash + Eq,
    G: ?Sized,
{
    graph: &'g G,
    start: T,
    /// `None` means there is no goal and the search covers every reachable
    /// node.
    goals: Option<HashSet<T>>,
    pub frontier: Frontier<T>,
    /// `g(n)`: the best known distance from the start to each node seen so
    /// far. Nodes not in the map are at infinite distance.
    pub cost_so_far: HashMap<T, f64>,
    pub statistics: SearchStatistics,
}

impl<'g, T, G> SearchCore<'g, T, G>
where
    T: Clone + Eq + Hash,
    G: GraphSpec<T> + ?Sized,
{
    /// Set up a search from `start`. When `goals` is given it must not be
    /// empty, see [`goal_set`].
    pub fn new(graph: &'g G, start: T, goals: Option<HashSet<T>>) -> Self {
        debug_assert!(goals.as_ref().map_or(true, |goals| !goals.is_empty()));
        let mut frontier = Frontier::new();
        frontier.offer(start.clone(), 0.);
        let mut cost_so_far = HashMap::new();
        cost_so_far.insert(start.clone(), 0.);

        Self {
            graph,
            start,
            goals,
            frontier,
            cost_so_far,
            statistics: SearchStatistics::new(),
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    /// The best known distance from the start to `node`.
    pub fn distance(&self, node: &T) -> f64 {
        self.cost_so_far.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// `h(n)`: the smallest heuristic estimate from `node` to any of the
    /// goals. Taking the minimum keeps the estimate admissible when there are
    /// several goals. Without goals this is always 0.
    pub fn compute_heuristic(&self, node: &T) -> f64 {
        match &self.goals {
            Some(goals) => goals
                .iter()
                .map(|goal| self.graph.heuristic(node, goal))
                .fold(f64::INFINITY, f64::min),
            None => 0.,
        }
    }

    pub fn is_goal(&self, node: &T) -> bool {
        self.goals
            .as_ref()
            .is_some_and(|goals| goals.contains(node))
    }

    /// Evaluate every edge out of `current`. Edges with a non-finite cost are
    /// dropped; every neighbour counts as examined either way.
    pub fn relax_neighbors(&mut self, current: &T) -> Vec<Relaxation<T>> {
        let current_cost = self.distance(current);
        let neighbors = self.graph.neighbors(current);
        let mut relaxations = Vec::with_capacity(neighbors.len());
        for next in neighbors {
            self.statistics.increment_examined_nodes();
            let cost = self.graph.cost(current, &next);
            if !cost.is_finite() {
                continue;
            }
            let known_cost = self.distance(&next);
            relaxations.push(Relaxation {
                next,
                alt_cost: current_cost + cost,
                known_cost,
            });
        }
        relaxations
    }

    /// Record a strictly better distance to `node` and queue it with priority
    /// `f(n) = g(n) + h(n)`.
    pub fn improve(&mut self, node: T, cost: f64) {
        self.statistics.increment_improved_nodes();
        self.cost_so_far.insert(node.clone(), cost);
        self.enqueue(node, cost);
    }

    /// Queue `node`, whose best known distance is `cost`, with priority
    /// `f(n) = g(n) + h(n)`.
    pub fn enqueue(&mut self, node: T, cost: f64) {
        let priority = cost + self.compute_heuristic(&node);
        if self.frontier.offer(node, priority) {
            self.statistics.increment_generated_nodes();
        }
    }

    /// Finish the search, keeping only what the result accessors need.
    pub fn complete<C>(self, came_from: C, reached_goals: Vec<T>) -> SearchOutcome<T, C> {
        self.statistics.finalise_search(self.frontier.high_water());
        SearchOutcome {
            start: self.start,
            cost_so_far: self.cost_so_far,
            came_from,
            reached_goals,
            num_nodes_examined: self.statistics.examined_nodes(),
        }
    }
}

/// The back-references left behind by a search, from which shortest paths
/// are rebuilt.
pub(crate) trait CameFrom<T> {
    /// The first recorded predecessor of `node` on a shortest path.
    fn first_predecessor(&self, node: &T) -> Option<&T>;

    /// Every node that has at least one recorded predecessor.
    fn reached_nodes(&self) -> HashSet<T>;
}

impl<T> CameFrom<T> for HashMap<T, T>
where
    T: Clone + Eq + Hash,
{
    fn first_predecessor(&self, node: &T) -> Option<&T> {
        self.get(node)
    }

    fn reached_nodes(&self) -> HashSet<T> {
        self.keys().cloned().collect()
    }
}

/// A finished search. Nothing in here changes after the search returns.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome<T, C> {
    pub start: T,
    pub cost_so_far: HashMap<T, f64>,
    pub came_from: C,
    /// The nearest goals, in the order they were found. Empty when no goal
    /// was given or none could be reached.
    pub reached_goals: Vec<T>,
    pub num_nodes_examined: usize,
}

impl<T, C> SearchOutcome<T, C>
where
    T: Clone + Eq + Hash,
    C: CameFrom<T>,
{
    pub fn reached_goal(&self) -> Option<&T> {
        self.reached_goals.first()
    }

    /// The cost of the shortest path to `target`, or infinity if there is
    /// none.
    pub fn shortest_path_cost(&self, target: &T) -> f64 {
        self.cost_so_far
            .get(target)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// The cost of the shortest path to the nearest goal, or infinity if no
    /// goal was reached.
    pub fn shortest_path_cost_to_goal(&self) -> f64 {
        match self.reached_goal() {
            Some(goal) => self.shortest_path_cost(goal),
            None => f64::INFINITY,
        }
    }

    /// One shortest path from the start to `target`, both included. The path
    /// from the start to itself is `[start]`.
    pub fn shortest_path(&self, target: &T) -> Option<Vec<T>> {
        let Some(mut next) = self.came_from.first_predecessor(target) else {
            return (*target == self.start).then(|| vec![self.start.clone()]);
        };
        let mut path = vec![target.clone()];
        loop {
            path.push(next.clone());
            match self.came_from.first_predecessor(next) {
                Some(predecessor) => next = predecessor,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn shortest_path_to_goal(&self) -> Option<Vec<T>> {
        self.reached_goal().and_then(|goal| self.shortest_path(goal))
    }

    pub fn reachable_nodes(&self) -> HashSet<T> {
        self.came_from.reached_nodes()
    }
}

//! Best-first search that finds *every* shortest path.
//!
//! Unlike the single-path searcher, this one does not stop at the first goal:
//! it keeps polling the frontier until every entry whose priority ties with
//! the best goal cost has been examined, so that all equidistant goals and all
//! equal-cost paths to them are found. To remember the alternatives, each node
//! keeps a set of predecessors instead of a single one; together they form a
//! DAG pointing back towards the start.

use crate::search::{
    search_core::{CameFrom, SearchCore, SearchOutcome},
    GraphSpec,
};
use smallvec::SmallVec;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};
use tracing::trace;

/// Most nodes have one or two shortest-path predecessors.
const TYPICAL_NUM_PREDECESSORS: usize = 2;
pub(crate) type PredecessorSet<T> = SmallVec<[T; TYPICAL_NUM_PREDECESSORS]>;

/// For each node `n`, the nodes immediately preceding `n` on the cheapest
/// known paths to it from the start, in the order they were found.
#[derive(Debug, Clone)]
pub(crate) struct PredecessorDag<T> {
    predecessors: HashMap<T, PredecessorSet<T>>,
}

impl<T> PredecessorDag<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            predecessors: HashMap::new(),
        }
    }

    /// Forget all predecessors of `node` and make `predecessor` its only one.
    pub fn replace(&mut self, node: T, predecessor: T) {
        let predecessors = self.predecessors.entry(node).or_default();
        predecessors.clear();
        predecessors.push(predecessor);
    }

    /// Add `predecessor` to the predecessors of `node`. Returns `false` if it
    /// was already there.
    pub fn add(&mut self, node: T, predecessor: T) -> bool {
        let predecessors = self.predecessors.entry(node).or_default();
        if predecessors.contains(&predecessor) {
            return false;
        }
        predecessors.push(predecessor);
        true
    }

    pub fn predecessors(&self, node: &T) -> &[T] {
        self.predecessors
            .get(node)
            .map(|predecessors| predecessors.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &T) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Every path from `start` to `target` through the DAG, found with an
    /// explicit depth-first traversal so that long paths cannot overflow the
    /// stack. A single partial path is extended and backtracked in place;
    /// predecessors already on it are skipped, so cycles through zero-cost
    /// edges are never followed.
    pub fn paths_to(&self, start: &T, target: &T) -> HashSet<Vec<T>> {
        let mut paths: HashSet<Vec<T>> = HashSet::new();
        // Target-first, with the number of predecessors tried for each node.
        let mut partial_path: Vec<(&T, usize)> = vec![(target, 0)];
        let mut on_path: HashSet<&T> = HashSet::from([target]);
        while let Some(&(node, tried)) = partial_path.last() {
            if node == start {
                paths.insert(
                    partial_path
                        .iter()
                        .rev()
                        .map(|&(node, _)| node.clone())
                        .collect(),
                );
            } else if let Some(predecessor) = self.predecessors(node).get(tried) {
                let last = partial_path.len() - 1;
                partial_path[last].1 += 1;
                if on_path.insert(predecessor) {
                    partial_path.push((predecessor, 0));
                }
                continue;
            }
            // Reached the start, or ran out of predecessors.
            partial_path.pop();
            on_path.remove(node);
        }
        paths
    }
}

impl<T> CameFrom<T> for PredecessorDag<T>
where
    T: Clone + Eq + Hash,
{
    fn first_predecessor(&self, node: &T) -> Option<&T> {
        self.predecessors(node).first()
    }

    fn reached_nodes(&self) -> HashSet<T> {
        self.predecessors.keys().cloned().collect()
    }
}

/// A finished multi-path search.
pub(crate) type MultiPathOutcome<T> = SearchOutcome<T, PredecessorDag<T>>;

impl<T> MultiPathOutcome<T>
where
    T: Clone + Eq + Hash,
{
    /// All shortest paths from the start to `target`, or `None` if `target`
    /// was not reached. The only path from the start to itself is `[start]`.
    pub fn shortest_paths(&self, target: &T) -> Option<HashSet<Vec<T>>> {
        if !self.came_from.contains(target) {
            return (*target == self.start).then(|| HashSet::from([vec![self.start.clone()]]));
        }
        Some(self.came_from.paths_to(&self.start, target))
    }

    /// All nearest goals, or `None` if no goal was reached.
    pub fn reached_goal_set(&self) -> Option<HashSet<T>> {
        if self.reached_goals.is_empty() {
            return None;
        }
        Some(self.reached_goals.iter().cloned().collect())
    }

    /// The union of all shortest paths to each of the nearest goals, or
    /// `None` if no goal was reached.
    pub fn shortest_paths_to_goals(&self) -> Option<HashSet<Vec<T>>> {
        if self.reached_goals.is_empty() {
            return None;
        }
        Some(
            self.reached_goals
                .iter()
                .filter_map(|goal| self.shortest_paths(goal))
                .flatten()
                .collect(),
        )
    }
}

pub(crate) struct MultiPathSearcher<'g, T, G>
where
    T: Hash + Eq,
    G: ?Sized,
{
    core: SearchCore<'g, T, G>,
    came_from: PredecessorDag<T>,
}

impl<'g, T, G> MultiPathSearcher<'g, T, G>
where
    T: Clone + Eq + Hash,
    G: GraphSpec<T> + ?Sized,
{
    pub fn new(core: SearchCore<'g, T, G>) -> Self {
        Self {
            core,
            came_from: PredecessorDag::new(),
        }
    }

    pub fn run(mut self) -> MultiPathOutcome<T> {
        let mut best_cost: Option<f64> = None;
        let mut reached_goals: Vec<T> = Vec::new();
        // Nodes that have been queued at least once. A tie alone does not
        // queue a node again.
        let mut enqueued: HashSet<T> = HashSet::new();
        enqueued.insert(self.core.start().clone());

        while let Some((current, priority)) = self.core.frontier.poll() {
            // Nothing left in the frontier can be on a shortest path.
            if best_cost.is_some_and(|best| best < priority) {
                break;
            }
            self.core.statistics.increment_expanded_nodes();

            if self.core.is_goal(&current) {
                let cost = self.core.distance(&current);
                if best_cost.map_or(true, |best| cost <= best) {
                    trace!(cost, "reached goal");
                    best_cost = Some(cost);
                    if !reached_goals.contains(&current) {
                        reached_goals.push(current);
                    }
                }
                // Keep draining the frontier for equal-cost alternatives,
                // but never search past a goal.
                continue;
            }

            for relaxation in self.core.relax_neighbors(&current) {
                if relaxation.alt_cost > relaxation.known_cost
                    || relaxation.next == *self.core.start()
                {
                    continue;
                }
                if relaxation.alt_cost < relaxation.known_cost {
                    self.came_from
                        .replace(relaxation.next.clone(), current.clone());
                    enqueued.insert(relaxation.next.clone());
                    self.core.improve(relaxation.next, relaxation.alt_cost);
                } else {
                    if self
                        .came_from
                        .add(relaxation.next.clone(), current.clone())
                    {
                        self.core.statistics.increment_tied_predecessors();
                    }
                    if enqueued.insert(relaxation.next.clone()) {
                        self.core.enqueue(relaxation.next, relaxation.alt_cost);
                    }
                }
            }
        }

        self.core.complete(self.came_from, reached_goals)
    }
}

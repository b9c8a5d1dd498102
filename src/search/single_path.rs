//! Classic A*/Dijkstra search that stops at the first goal it expands and
//! remembers a single predecessor per node.

use crate::search::{
    search_core::{SearchCore, SearchOutcome},
    GraphSpec,
};
use std::{collections::HashMap, hash::Hash};
use tracing::trace;

/// A finished single-path search.
pub(crate) type SinglePathOutcome<T> = SearchOutcome<T, HashMap<T, T>>;

pub(crate) struct SinglePathSearcher<'g, T, G>
where
    T: Hash + Eq,
    G: ?Sized,
{
    core: SearchCore<'g, T, G>,
    /// For each node, its predecessor on the cheapest known path from the
    /// start.
    came_from: HashMap<T, T>,
}

impl<'g, T, G> SinglePathSearcher<'g, T, G>
where
    T: Clone + Eq + Hash,
    G: GraphSpec<T> + ?Sized,
{
    pub fn new(core: SearchCore<'g, T, G>) -> Self {
        Self {
            core,
            came_from: HashMap::new(),
        }
    }

    /// Run the search to completion. Without goals every reachable node is
    /// settled; with goals the search stops as soon as one is expanded, so
    /// other goals at the same distance are not reported.
    pub fn run(mut self) -> SinglePathOutcome<T> {
        let mut reached_goal = None;

        while let Some((current, _priority)) = self.core.frontier.poll() {
            self.core.statistics.increment_expanded_nodes();
            if self.core.is_goal(&current) {
                trace!(cost = self.core.distance(&current), "reached goal");
                reached_goal = Some(current);
                break;
            }

            for relaxation in self.core.relax_neighbors(&current) {
                if relaxation.alt_cost < relaxation.known_cost {
                    self.came_from
                        .insert(relaxation.next.clone(), current.clone());
                    self.core.improve(relaxation.next, relaxation.alt_cost);
                }
            }
        }

        self.core
            .complete(self.came_from, reached_goal.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::collections::HashSet;

    fn run(graph: &WeightedGraph, start: u32, goals: Option<&[u32]>) -> SinglePathOutcome<u32> {
        let goals = goals.map(|goals| goals.iter().copied().collect::<HashSet<_>>());
        SinglePathSearcher::new(SearchCore::new(graph, start, goals)).run()
    }

    #[test]
    fn settles_every_reachable_node_without_goals() {
        let graph = WeightedGraph::new(&[(0, 1, 4.), (0, 2, 1.), (2, 1, 2.), (1, 3, 1.), (4, 0, 1.)]);
        let outcome = run(&graph, 0, None);

        assert_eq!(outcome.shortest_path_cost(&1), 3.);
        assert_eq!(outcome.shortest_path_cost(&3), 4.);
        assert_eq!(outcome.shortest_path(&3), Some(vec![0, 2, 1, 3]));
        assert_eq!(outcome.shortest_path_cost(&4), f64::INFINITY);
        assert_eq!(outcome.shortest_path(&4), None);
        assert_eq!(outcome.reachable_nodes(), HashSet::from([1, 2, 3]));
        assert_eq!(outcome.reached_goal(), None);
    }

    #[test]
    fn stops_at_first_goal() {
        let graph = WeightedGraph::new(&[(0, 1, 1.), (1, 2, 1.), (2, 3, 1.), (3, 4, 1.)]);
        let outcome = run(&graph, 0, Some(&[2, 4]));

        assert_eq!(outcome.reached_goal(), Some(&2));
        assert_eq!(outcome.shortest_path_to_goal(), Some(vec![0, 1, 2]));
        assert_eq!(outcome.shortest_path_cost_to_goal(), 2.);
        // 4 was never discovered because the search stopped at 2
        assert_eq!(outcome.shortest_path_cost(&4), f64::INFINITY);
    }

    #[test]
    fn start_can_be_a_goal() {
        let graph = WeightedGraph::new(&[(0, 1, 1.)]);
        let outcome = run(&graph, 0, Some(&[0, 1]));

        assert_eq!(outcome.reached_goal(), Some(&0));
        assert_eq!(outcome.shortest_path_to_goal(), Some(vec![0]));
        assert_eq!(outcome.shortest_path_cost_to_goal(), 0.);
    }

    #[test]
    fn unreachable_goal_is_not_found() {
        let graph = WeightedGraph::new(&[(0, 1, 1.), (2, 3, 1.), (1, 3, f64::INFINITY)]);
        let outcome = run(&graph, 0, Some(&[3]));

        assert_eq!(outcome.reached_goal(), None);
        assert_eq!(outcome.shortest_path_to_goal(), None);
        assert_eq!(outcome.shortest_path_cost_to_goal(), f64::INFINITY);
    }

    #[test]
    fn later_cheaper_route_replaces_predecessor() {
        // 0 -> 3 directly costs 10, going through 1 and 2 costs 3
        let graph = WeightedGraph::new(&[(0, 3, 10.), (0, 1, 1.), (1, 2, 1.), (2, 3, 1.)]);
        let outcome = run(&graph, 0, Some(&[3]));

        assert_eq!(outcome.shortest_path_to_goal(), Some(vec![0, 1, 2, 3]));
        assert_eq!(outcome.shortest_path_cost_to_goal(), 3.);
    }

    #[test]
    fn counts_every_examined_neighbour() {
        let graph = WeightedGraph::new(&[(0, 1, 1.), (0, 2, 1.), (1, 2, 1.)]);
        let outcome = run(&graph, 0, None);
        // start + 2 neighbours of 0 + 1 neighbour of 1
        assert_eq!(outcome.num_nodes_examined, 4);
    }
}

//! The open list used by the best-first searches.

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, hash::Hash};

/// Frontier priorities: lower is better. [`PriorityQueue`] is a max-heap, so
/// the priority is wrapped in [`Reverse`].
pub type Priority = Reverse<OrderedFloat<f64>>;

/// A priority queue of nodes that holds at most one entry per node.
///
/// Offering a node that is already queued only has an effect when the new
/// priority is strictly better, in which case the queued entry is moved up
/// in place. Polled nodes are forgotten, so a node may be offered again after
/// it has been expanded.
#[derive(Debug)]
pub struct Frontier<T>
where
    T: Hash + Eq,
{
    queue: PriorityQueue<T, Priority>,
    high_water: usize,
}

impl<T> Frontier<T>
where
    T: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            high_water: 0,
        }
    }

    /// Queue `node` with the given priority. Returns `false` (and leaves the
    /// frontier untouched) if the node is already queued with a better or
    /// equal priority.
    pub fn offer(&mut self, node: T, priority: f64) -> bool {
        let priority = Reverse(OrderedFloat(priority));
        if let Some(existing) = self.queue.get_priority(&node) {
            if priority <= *existing {
                return false;
            }
        }
        self.queue.push(node, priority);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Remove and return the node with the lowest priority, along with that
    /// priority.
    pub fn poll(&mut self) -> Option<(T, f64)> {
        self.queue
            .pop()
            .map(|(node, Reverse(OrderedFloat(priority)))| (node, priority))
    }

    /// The priority `node` is currently queued with, if any.
    pub fn priority_of(&self, node: &T) -> Option<f64> {
        self.queue
            .get_priority(node)
            .map(|Reverse(OrderedFloat(priority))| *priority)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The largest number of entries the frontier has held at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for Frontier<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_returns_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.offer('a', 10.);
        frontier.offer('b', 5.);
        frontier.offer('c', 15.);

        assert_eq!(frontier.poll(), Some(('b', 5.)));
        assert_eq!(frontier.poll(), Some(('a', 10.)));
        assert_eq!(frontier.poll(), Some(('c', 15.)));
        assert_eq!(frontier.poll(), None);
    }

    #[test]
    fn better_offer_replaces_queued_entry() {
        let mut frontier = Frontier::new();
        assert!(frontier.offer('a', 10.));
        assert!(frontier.offer('b', 7.));
        assert!(frontier.offer('a', 3.));

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.priority_of(&'a'), Some(3.));
        assert_eq!(frontier.poll(), Some(('a', 3.)));
        assert_eq!(frontier.poll(), Some(('b', 7.)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn worse_or_equal_offer_is_ignored() {
        let mut frontier = Frontier::new();
        assert!(frontier.offer('a', 4.));
        assert!(!frontier.offer('a', 4.));
        assert!(!frontier.offer('a', 9.));

        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.poll(), Some(('a', 4.)));
        assert_eq!(frontier.poll(), None);
    }

    #[test]
    fn polled_node_can_be_offered_again() {
        let mut frontier = Frontier::new();
        frontier.offer('a', 1.);
        assert_eq!(frontier.poll(), Some(('a', 1.)));
        assert_eq!(frontier.priority_of(&'a'), None);

        assert!(frontier.offer('a', 8.));
        assert_eq!(frontier.poll(), Some(('a', 8.)));
    }

    #[test]
    fn infinite_priorities_sort_last() {
        let mut frontier = Frontier::new();
        frontier.offer('a', f64::INFINITY);
        frontier.offer('b', 1e300);

        assert_eq!(frontier.poll(), Some(('b', 1e300)));
        assert_eq!(frontier.poll(), Some(('a', f64::INFINITY)));
    }

    #[test]
    fn high_water_does_not_decrease_on_poll() {
        let mut frontier = Frontier::new();
        frontier.offer(1, 1.);
        frontier.offer(2, 2.);
        frontier.offer(3, 3.);
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.poll();
        let _ = frontier.poll();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.high_water(), 3);
    }
}

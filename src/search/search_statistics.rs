use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters kept while a search runs. Progress is logged every 10 seconds for
/// long searches and a summary is logged when the search finishes.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes polled from the frontier
    expanded_nodes: usize,
    /// Number of nodes examined, i.e. the start node plus every neighbour
    /// evaluated during expansion
    examined_nodes: usize,
    /// Number of entries added to or moved up in the frontier
    generated_nodes: usize,
    /// Number of times a node's best known distance went down
    improved_nodes: usize,
    /// Number of equal-cost predecessors recorded in addition to the first
    tied_predecessors: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            examined_nodes: 1,
            generated_nodes: 0,
            improved_nodes: 0,
            tied_predecessors: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_examined_nodes(&mut self) {
        self.examined_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_improved_nodes(&mut self) {
        self.improved_nodes += 1;
    }

    pub fn increment_tied_predecessors(&mut self) {
        self.tied_predecessors += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn examined_nodes(&self) -> usize {
        self.examined_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            info!(
                expanded_nodes = self.expanded_nodes,
                examined_nodes = self.examined_nodes,
                generated_nodes = self.generated_nodes,
                time_elapsed = self.elapsed().as_secs_f64(),
            );
        }
    }

    pub fn finalise_search(&self, frontier_high_water: usize) {
        debug!(
            expanded_nodes = self.expanded_nodes,
            examined_nodes = self.examined_nodes,
            generated_nodes = self.generated_nodes,
            improved_nodes = self.improved_nodes,
            tied_predecessors = self.tied_predecessors,
            frontier_high_water,
            search_duration = self.elapsed().as_secs_f64(),
            "finished search"
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

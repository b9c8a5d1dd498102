use crate::search::GraphSpec;
use std::fmt;

/// Two X goals, one start `a` at (1, 3). Three shortest paths of cost 4 lead
/// to (2, 6), while (1, 1) is 5 moves away through the bottom edge.
pub const SEARCH_GRID: &[&str] = &[
    "#...", //
    "#X#.", //
    "###.", //
    ".a#.", //
    "....", //
    "....", //
    "..X.", //
];

/// Equidistant goals X and Y, 3 moves from `a` at (3, 0), with Z farther
/// away at (1, 5).
pub const EQUIDISTANT_GOALS_GRID: &[&str] = &[
    "#..a", //
    "#X#.", //
    "###.", //
    "..#Y", //
    "....", //
    ".Z..", //
    "....", //
];

/// Neither X can be reached from `a` at (1, 3).
pub const WALLED_OFF_GRID: &[&str] = &[
    "###.", //
    "#X#.", //
    "###.", //
    ".a#.", //
    "....", //
    "..#.", //
    ".#X#", //
];

/// Starts `a` at (1, 1) and `b` at (2, 6), goals X at (0, 0) and (1, 3). Six
/// shortest paths lead from `b` to (0, 0).
pub const MULTIPLE_PATHS_GRID_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/small.txt"
));

pub const MEDIUM_GRID_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/medium.txt"
));

pub const LARGE_GRID_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/large.txt"
));

type Heuristic = Box<dyn Fn(&u32, &u32) -> f64>;

/// A small directed graph over `u32` nodes, given as a list of weighted
/// edges. Neighbours are returned in the order their edges were listed.
pub struct WeightedGraph {
    edges: Vec<(u32, u32, f64)>,
    heuristic: Option<Heuristic>,
}

impl WeightedGraph {
    pub fn new(edges: &[(u32, u32, f64)]) -> Self {
        Self {
            edges: edges.to_vec(),
            heuristic: None,
        }
    }

    /// Every edge goes both ways with the same weight.
    pub fn undirected(edges: &[(u32, u32, f64)]) -> Self {
        let edges = edges
            .iter()
            .flat_map(|&(a, b, weight)| [(a, b, weight), (b, a, weight)])
            .collect::<Vec<_>>();
        Self::new(&edges)
    }

    pub fn with_heuristic(mut self, heuristic: impl Fn(&u32, &u32) -> f64 + 'static) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

impl fmt::Debug for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("edges", &self.edges)
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl GraphSpec<u32> for WeightedGraph {
    fn neighbors(&self, node: &u32) -> Vec<u32> {
        let mut neighbors = Vec::new();
        for &(from, to, _) in &self.edges {
            if from == *node && !neighbors.contains(&to) {
                neighbors.push(to);
            }
        }
        neighbors
    }

    fn cost(&self, a: &u32, b: &u32) -> f64 {
        self.edges
            .iter()
            .filter(|(from, to, _)| from == a && to == b)
            .map(|&(_, _, weight)| weight)
            .fold(f64::INFINITY, f64::min)
    }

    fn heuristic(&self, a: &u32, b: &u32) -> f64 {
        self.heuristic.as_ref().map_or(0., |heuristic| heuristic(a, b))
    }
}

//! Best-first path search over implicitly defined graphs.
//!
//! Searches are started through one of the engines in [`search_engines`],
//! which return read-only results implementing the traits in [`results`].

mod error;
mod frontier;
mod graph_spec;
mod multi_path;
mod report;
pub mod results;
mod search_core;
pub mod search_engines;
mod search_statistics;
mod single_path;

pub use error::SearchError;
pub use frontier::{Frontier, Priority};
pub use graph_spec::GraphSpec;
pub(crate) use multi_path::MultiPathSearcher;
pub use report::{SearchReport, TargetReport};
pub use results::{
    AStarMultiPathResult, AStarMultiPathSearch, AStarSearch, AStarSearchResult,
    DijkstraMultiPathResult, DijkstraMultiPathSearch, DijkstraSearch, DijkstraSearchResult,
};
pub use search_engines::{AStar, AStarMultiPath, Dijkstra, DijkstraMultiPath, SearchEngineName};
pub use search_statistics::SearchStatistics;
pub(crate) use single_path::SinglePathSearcher;

mod astar;
mod dijkstra;
mod search_engine;

pub use astar::{AStar, AStarMultiPath};
pub use dijkstra::{Dijkstra, DijkstraMultiPath};
pub use search_engine::SearchEngineName;

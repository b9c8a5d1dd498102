//! Ready-made [`GraphSpec`](crate::search::GraphSpec) implementations.

mod grid;
mod petgraph_spec;

pub use grid::{loc, Grid, GridError, GridGraph, Location, ParseLocationError, OBSTACLE};
pub use petgraph_spec::PetgraphSpec;

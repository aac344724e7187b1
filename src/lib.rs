//! A* shortest-path search on 4-connected grids.
//!
//! The search consumes a grid snapshot (a [`CellGrid`] or anything
//! implementing [`PassableGrid`]) and produces the path from the cell after
//! the start up to and including the goal. "No path" is a normal outcome,
//! reported through [`SearchStatus`] rather than as an error.

mod astar;
mod bfs;
mod config;
mod dijkstra;
mod edit;
mod error;
mod grid;
mod heuristic;
mod metadata;
mod path;
mod search;

pub use astar::*;
pub use bfs::*;
pub use config::*;
pub use edit::*;
pub use error::*;
pub use grid::*;
pub use heuristic::*;
pub use metadata::*;
pub use path::*;
pub use search::*;

pub use direction::CardinalDirection;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;

use crate::grid::*;
use crate::path::step_direction;
use grid_2d::{Coord, Grid, Size};

mod bfs;
mod grid;

impl PassableGrid for Grid<bool> {
    fn size(&self) -> Size {
        Grid::size(self)
    }

    fn is_passable(&self, coord: Coord) -> Option<bool> {
        self.get(coord).map(|&wall| !wall)
    }
}

fn grid_from_strings(strings: &[&str]) -> CellGrid {
    CellGrid::from_strings(strings).unwrap()
}

/// Asserts that `path` walks from `start` to `goal` one orthogonal step at a
/// time without leaving the grid or entering a wall.
fn check_path<G: PassableGrid>(grid: &G, start: Coord, goal: Coord, path: &[Coord]) {
    let mut current = start;
    for &coord in path {
        assert!(
            step_direction(current, coord).is_some(),
            "{:?} -> {:?} is not a single step",
            current,
            coord
        );
        assert_eq!(grid.is_passable(coord), Some(true), "{:?} is blocked", coord);
        current = coord;
    }
    assert_eq!(current, goal);
}

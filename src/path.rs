use direction::CardinalDirection;
use grid_2d::{Coord, Grid};
use std::slice;

pub(crate) trait PathNode {
    fn seen(&self) -> u64;
    fn from_parent(&self) -> Option<CardinalDirection>;
}

/// Follows predecessor links back from `goal`, writing the path in forward
/// order with the start excluded. Leaves `path` empty if `goal` was not seen
/// in generation `seq`.
pub(crate) fn make_path_all_adjacent<N: PathNode>(
    node_grid: &Grid<N>,
    seq: u64,
    goal: Coord,
    path: &mut Vec<Coord>,
) {
    path.clear();
    let mut coord = goal;
    while let Some(node) = node_grid.get(coord) {
        if node.seen() != seq {
            path.clear();
            return;
        }
        match node.from_parent() {
            Some(direction) => {
                path.push(coord);
                coord = coord + direction.opposite().coord();
            }
            None => break,
        }
    }
    path.reverse();
}

/// The direction of a single orthogonal step, or `None` if `to` is not
/// adjacent to `from`.
pub fn step_direction(from: Coord, to: Coord) -> Option<CardinalDirection> {
    match (to.x - from.x, to.y - from.y) {
        (0, -1) => Some(CardinalDirection::North),
        (1, 0) => Some(CardinalDirection::East),
        (0, 1) => Some(CardinalDirection::South),
        (-1, 0) => Some(CardinalDirection::West),
        _ => None,
    }
}

/// Walks a path from its start, yielding each coordinate along with the
/// direction travelled to reach it. Stops early at the first step that is
/// not to an adjacent cell.
pub struct PathSteps<'a> {
    current_coord: Coord,
    coords: slice::Iter<'a, Coord>,
}

impl<'a> PathSteps<'a> {
    pub fn new(start: Coord, path: &'a [Coord]) -> Self {
        Self {
            current_coord: start,
            coords: path.iter(),
        }
    }
}

impl<'a> Iterator for PathSteps<'a> {
    type Item = (Coord, CardinalDirection);
    fn next(&mut self) -> Option<Self::Item> {
        let &next_coord = self.coords.next()?;
        let direction = step_direction(self.current_coord, next_coord)?;
        self.current_coord = next_coord;
        Some((next_coord, direction))
    }
}

use super::grid_from_strings;
use crate::error::*;
use crate::grid::*;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};

fn neighbour_coords<G: PassableGrid>(grid: &G, coord: Coord) -> Vec<Coord> {
    grid.neighbours(coord).map(|(neighbour, _)| neighbour).collect()
}

#[test]
fn neighbour_order() {
    let grid = grid_from_strings(&["...", ".g.", "...", "..s"]);
    let neighbours: Vec<_> = grid.neighbours(Coord::new(1, 1)).collect();
    assert_eq!(
        neighbours,
        vec![
            (Coord::new(0, 1), CardinalDirection::West),
            (Coord::new(2, 1), CardinalDirection::East),
            (Coord::new(1, 0), CardinalDirection::North),
            (Coord::new(1, 2), CardinalDirection::South),
        ]
    );
}

#[test]
fn neighbours_at_edges() {
    let grid = grid_from_strings(&["g..", "...", "..s"]);
    assert_eq!(
        neighbour_coords(&grid, Coord::new(0, 0)),
        vec![Coord::new(1, 0), Coord::new(0, 1)]
    );
    assert_eq!(
        neighbour_coords(&grid, Coord::new(2, 1)),
        vec![Coord::new(1, 1), Coord::new(2, 0)]
    );
}

#[test]
fn neighbours_skip_walls_and_start() {
    let grid = grid_from_strings(&["#s.", ".#g"]);
    assert_eq!(neighbour_coords(&grid, Coord::new(2, 0)), vec![Coord::new(2, 1)]);
    assert!(neighbour_coords(&grid, Coord::new(0, 1)).is_empty());
}

#[test]
fn neighbours_of_wall_map() {
    let mut walls = Grid::new_copy(Size::new(3, 3), false);
    *walls.get_mut(Coord::new(1, 0)).unwrap() = true;
    let neighbours: Vec<_> = walls.neighbours(Coord::new(1, 1)).collect();
    assert_eq!(
        neighbours,
        vec![
            (Coord::new(0, 1), CardinalDirection::West),
            (Coord::new(2, 1), CardinalDirection::East),
            (Coord::new(1, 2), CardinalDirection::South),
        ]
    );
    assert_eq!(
        neighbour_coords(&walls, Coord::new(2, 2)),
        vec![Coord::new(1, 2), Coord::new(2, 1)]
    );
}

#[test]
fn trail_is_passable() {
    let grid = grid_from_strings(&["s>v", "..g"]);
    assert_eq!(grid.is_passable(Coord::new(1, 0)), Some(true));
    assert_eq!(grid.is_passable(Coord::new(0, 0)), Some(false));
    assert_eq!(grid.is_passable(Coord::new(3, 0)), None);
}

#[test]
fn display_round_trip() {
    let strings = ["..#.", "s#g.", "<^v>"];
    let grid = grid_from_strings(&strings);
    assert_eq!(grid.to_string(), "..#.\ns#g.\n<^v>\n");
    let rows: Vec<String> = grid.to_string().lines().map(String::from).collect();
    let reparsed = CellGrid::from_strings(&rows[..]).unwrap();
    assert_eq!(reparsed.start(), Coord::new(0, 1));
    assert_eq!(reparsed.goal(), Coord::new(2, 1));
}

#[test]
fn parse_errors() {
    let empty: [&str; 0] = [];
    assert_eq!(
        CellGrid::from_strings(&empty).unwrap_err(),
        GridError::EmptyGrid
    );
    assert_eq!(
        CellGrid::from_strings(&["s..", ".g"]).unwrap_err(),
        GridError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(
        CellGrid::from_strings(&["s.x", "..g"]).unwrap_err(),
        GridError::UnknownCell {
            coord: Coord::new(2, 0),
            ch: 'x',
        }
    );
    assert_eq!(
        CellGrid::from_strings(&["...", "..g"]).unwrap_err(),
        GridError::MissingStart
    );
    assert_eq!(
        CellGrid::from_strings(&["s..", "..."]).unwrap_err(),
        GridError::MissingGoal
    );
    assert_eq!(
        CellGrid::from_strings(&["s.s", "..g"]).unwrap_err(),
        GridError::MultipleStarts(Coord::new(2, 0))
    );
    assert_eq!(
        CellGrid::from_strings(&["s.g", "g.."]).unwrap_err(),
        GridError::MultipleGoals(Coord::new(0, 1))
    );
}

#[test]
fn construction_errors() {
    let size = Size::new(4, 3);
    assert_eq!(
        CellGrid::new(size, Coord::new(1, 1), Coord::new(1, 1)).unwrap_err(),
        GridError::StartIsGoal(Coord::new(1, 1))
    );
    assert_eq!(
        CellGrid::new(size, Coord::new(4, 0), Coord::new(1, 1)).unwrap_err(),
        GridError::OutsideGrid(Coord::new(4, 0))
    );
    assert_eq!(
        CellGrid::new(size, Coord::new(0, 0), Coord::new(0, -1)).unwrap_err(),
        GridError::OutsideGrid(Coord::new(0, -1))
    );
    assert_eq!(
        CellGrid::new(Size::new(0, 3), Coord::new(0, 0), Coord::new(0, 1)).unwrap_err(),
        GridError::EmptyGrid
    );
}

#[test]
fn from_walls_clears_endpoints() {
    let walls = Grid::new_copy(Size::new(3, 2), true);
    let grid = CellGrid::from_walls(&walls, Coord::new(0, 0), Coord::new(2, 1)).unwrap();
    assert_eq!(grid.cell(Coord::new(0, 0)), Some(Cell::Start));
    assert_eq!(grid.cell(Coord::new(2, 1)), Some(Cell::Goal));
    assert_eq!(grid.cell(Coord::new(1, 0)), Some(Cell::Wall));
}

#[test]
fn walls_cannot_replace_endpoints() {
    let mut grid = grid_from_strings(&["s.g"]);
    assert_eq!(
        grid.set_wall(Coord::new(0, 0), true),
        Err(GridError::Occupied(Coord::new(0, 0)))
    );
    assert_eq!(
        grid.toggle_wall(Coord::new(2, 0)),
        Err(GridError::Occupied(Coord::new(2, 0)))
    );
    assert_eq!(
        grid.toggle_wall(Coord::new(5, 0)),
        Err(GridError::OutsideGrid(Coord::new(5, 0)))
    );
    assert_eq!(grid.toggle_wall(Coord::new(1, 0)), Ok(true));
    assert_eq!(grid.cell(Coord::new(1, 0)), Some(Cell::Wall));
    assert_eq!(grid.toggle_wall(Coord::new(1, 0)), Ok(false));
    assert_eq!(grid.cell(Coord::new(1, 0)), Some(Cell::Empty));
}

#[test]
fn mark_path_with_directions() {
    let mut grid = grid_from_strings(&["s..", "#..", "..g"]);
    let path = [
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];
    grid.mark_path(&path);
    assert_eq!(grid.to_string(), "s>.\n#v>\n..g\n");
    assert_eq!(
        grid.cell(Coord::new(2, 1)),
        Some(Cell::Trail(CardinalDirection::East))
    );
}

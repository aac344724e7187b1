use super::{check_path, grid_from_strings};
use crate::bfs::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use grid_2d::{Coord, Grid, Size};

fn common_test(strings: &[&str], length: usize) {
    let grid = grid_from_strings(strings);
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let metadata = ctx
        .bfs(&grid, grid.start(), grid.goal(), &mut path)
        .unwrap();

    println!("{:?}", metadata);

    assert_eq!(metadata.status, SearchStatus::GoalFound);
    assert_eq!(path.len(), length);
    assert_eq!(metadata.cost, length);
    check_path(&grid, grid.start(), grid.goal(), &path);
}

#[test]
fn wall() {
    let strings = [
        "..........",
        "....#.....",
        "....#.....",
        "....#.....",
        ".s..#.....",
        "....#...g.",
        "....#.....",
        "..........",
        "..........",
        "..........",
    ];
    common_test(&strings, 12);
}

#[test]
fn adjacent() {
    common_test(&["sg"], 1);
    common_test(&["g", "s"], 1);
}

#[test]
fn no_path() {
    let strings = [
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        ".s..#.....",
        "....#...g.",
        "....######",
        "..........",
        "..........",
        "..........",
    ];

    let grid = grid_from_strings(&strings);
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let metadata = ctx
        .bfs(&grid, grid.start(), grid.goal(), &mut path)
        .unwrap();

    assert_eq!(metadata.status, SearchStatus::NoPath);
    assert!(path.is_empty());
}

#[test]
fn wall_map() {
    let mut walls = Grid::new_copy(Size::new(3, 3), false);
    *walls.get_mut(Coord::new(1, 0)).unwrap() = true;
    *walls.get_mut(Coord::new(1, 1)).unwrap() = true;

    let mut ctx = BfsContext::new(walls.size());
    let mut path = Vec::new();
    let start = Coord::new(0, 0);
    let goal = Coord::new(2, 0);
    let metadata = ctx.bfs(&walls, start, goal, &mut path).unwrap();

    assert_eq!(metadata.length, 6);
    assert_eq!(path[2], Coord::new(1, 2));
    check_path(&walls, start, goal, &path);
}

#[test]
fn start_outside_grid() {
    let grid = grid_from_strings(&["s.g"]);
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let result = ctx.bfs(&grid, Coord::new(3, 0), grid.goal(), &mut path);
    assert_eq!(result, Err(Error::StartOutsideGrid));
}

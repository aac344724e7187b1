//! Random scenarios for exercising grid searches: a wall map plus a start
//! and a distinct goal.

use grid_2d::{Coord, Grid, Size};
use rand::seq::SliceRandom;
use rand::Rng;

const OFFSETS: [Coord; 4] = [
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
];

#[derive(Debug, Clone)]
pub struct Scenario {
    /// `true` marks a wall.
    pub walls: Grid<bool>,
    pub start: Coord,
    pub goal: Coord,
}

impl Scenario {
    /// No walls, a fixed start and a random goal. `None` if the grid has
    /// fewer than two cells or `start` lies outside it.
    pub fn open<R: Rng>(size: Size, start: Coord, rng: &mut R) -> Option<Self> {
        let goal = random_goal(size, start, rng)?;
        Some(Self {
            walls: Grid::new_copy(size, false),
            start,
            goal,
        })
    }

    /// Each cell other than the start and goal becomes a wall with
    /// probability `density`.
    pub fn scattered<R: Rng>(size: Size, density: f64, start: Coord, rng: &mut R) -> Option<Self> {
        let goal = random_goal(size, start, rng)?;
        let walls = scatter_walls(size, density, &[start, goal], rng);
        Some(Self { walls, start, goal })
    }

    /// A perfect maze carved outwards from `start`, with the goal on a
    /// random passage cell. `None` if `start` lies outside the grid or the
    /// maze has no second passage cell.
    pub fn maze<R: Rng>(size: Size, start: Coord, rng: &mut R) -> Option<Self> {
        if !in_bounds(size, start) {
            return None;
        }
        let walls = recursive_backtrack(size, start, rng);
        let candidates: Vec<Coord> = open_coords(&walls)
            .into_iter()
            .filter(|&coord| coord != start)
            .collect();
        let goal = *candidates.choose(rng)?;
        Some(Self { walls, start, goal })
    }

    pub fn size(&self) -> Size {
        self.walls.size()
    }
}

pub fn random_coord<R: Rng>(size: Size, rng: &mut R) -> Coord {
    Coord::new(
        rng.gen_range(0..size.width()) as i32,
        rng.gen_range(0..size.height()) as i32,
    )
}

/// A uniformly chosen cell other than `avoid`.
pub fn random_goal<R: Rng>(size: Size, avoid: Coord, rng: &mut R) -> Option<Coord> {
    let width = size.width() as usize;
    let count = width * size.height() as usize;
    if count < 2 || !in_bounds(size, avoid) {
        return None;
    }
    let avoid_index = avoid.y as usize * width + avoid.x as usize;
    let mut index = rng.gen_range(0..count - 1);
    if index >= avoid_index {
        index += 1;
    }
    Some(Coord::new((index % width) as i32, (index / width) as i32))
}

pub fn scatter_walls<R: Rng>(
    size: Size,
    density: f64,
    keep_clear: &[Coord],
    rng: &mut R,
) -> Grid<bool> {
    let density = density.max(0.0).min(1.0);
    Grid::new_fn(size, |coord| {
        !keep_clear.contains(&coord) && rng.gen_bool(density)
    })
}

/// Depth-first maze carving from `origin`. Passages sit on cells whose
/// coordinates differ from `origin` by even amounts, and every passage cell
/// is reachable from every other.
pub fn recursive_backtrack<R: Rng>(size: Size, origin: Coord, rng: &mut R) -> Grid<bool> {
    let mut walls = Grid::new_copy(size, true);
    match walls.get_mut(origin) {
        Some(cell) => *cell = false,
        None => return walls,
    }

    let mut stack = vec![origin];
    let mut candidates = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        candidates.clear();
        for offset in OFFSETS.iter() {
            let next = current + Coord::new(offset.x * 2, offset.y * 2);
            if walls.get(next) == Some(&true) {
                candidates.push(next);
            }
        }

        let next = match candidates.choose(rng) {
            Some(&next) => next,
            None => {
                stack.pop();
                continue;
            }
        };

        let between = Coord::new((current.x + next.x) / 2, (current.y + next.y) / 2);
        for &coord in [between, next].iter() {
            if let Some(cell) = walls.get_mut(coord) {
                *cell = false;
            }
        }
        stack.push(next);
    }

    walls
}

pub fn open_coords(walls: &Grid<bool>) -> Vec<Coord> {
    let mut open = Vec::new();
    for y in 0..walls.height() as i32 {
        for x in 0..walls.width() as i32 {
            let coord = Coord::new(x, y);
            if walls.get(coord) == Some(&false) {
                open.push(coord);
            }
        }
    }
    open
}

fn in_bounds(size: Size, coord: Coord) -> bool {
    coord.x >= 0
        && coord.y >= 0
        && (coord.x as u32) < size.width()
        && (coord.y as u32) < size.height()
}

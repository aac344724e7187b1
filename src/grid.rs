use crate::error::GridError;
use crate::path::PathSteps;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use std::fmt;

/// Order in which neighbours are expanded. Equal-priority frontier entries
/// pop in insertion order, so this order decides which of several shortest
/// paths is returned.
pub const EXPANSION_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::West,
    CardinalDirection::East,
    CardinalDirection::North,
    CardinalDirection::South,
];

/// A grid the search can walk over.
pub trait PassableGrid {
    fn size(&self) -> Size;

    /// `None` if `coord` is outside the grid.
    fn is_passable(&self, coord: Coord) -> Option<bool>;

    fn is_passable_and_inside(&self, coord: Coord) -> bool {
        self.is_passable(coord).unwrap_or(false)
    }

    /// Passable orthogonal neighbours of `coord` in `EXPANSION_ORDER`, each
    /// with the direction of the step that reaches it.
    fn neighbours(&self, coord: Coord) -> Neighbours<'_, Self> {
        Neighbours {
            grid: self,
            coord,
            index: 0,
        }
    }
}

pub struct Neighbours<'a, G: ?Sized> {
    grid: &'a G,
    coord: Coord,
    index: usize,
}

impl<'a, G: PassableGrid + ?Sized> Iterator for Neighbours<'a, G> {
    type Item = (Coord, CardinalDirection);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = EXPANSION_ORDER.get(self.index) {
            self.index += 1;
            let neighbour = self.coord + direction.coord();
            if self.grid.is_passable_and_inside(neighbour) {
                return Some((neighbour, direction));
            }
        }
        None
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    Goal,
    /// An empty cell annotated with the direction a path travelled through
    /// it. Render-only; passable like `Empty`.
    Trail(CardinalDirection),
}

impl Cell {
    /// The start cell is not passable, so a search never re-enters it.
    pub fn is_passable(self) -> bool {
        match self {
            Cell::Empty | Cell::Goal | Cell::Trail(_) => true,
            Cell::Wall | Cell::Start => false,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let cell = match ch {
            '.' => Cell::Empty,
            '#' => Cell::Wall,
            's' => Cell::Start,
            'g' => Cell::Goal,
            '^' => Cell::Trail(CardinalDirection::North),
            '>' => Cell::Trail(CardinalDirection::East),
            'v' => Cell::Trail(CardinalDirection::South),
            '<' => Cell::Trail(CardinalDirection::West),
            _ => return None,
        };
        Some(cell)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Start => 's',
            Cell::Goal => 'g',
            Cell::Trail(CardinalDirection::North) => '^',
            Cell::Trail(CardinalDirection::East) => '>',
            Cell::Trail(CardinalDirection::South) => 'v',
            Cell::Trail(CardinalDirection::West) => '<',
        }
    }
}

/// A fixed-size grid of cells holding exactly one start and one goal.
///
/// Every constructor and mutation keeps that invariant, so a search over a
/// `CellGrid` never has to validate it.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Grid<Cell>,
    start: Coord,
    goal: Coord,
}

impl CellGrid {
    /// An empty grid with the given start and goal.
    pub fn new(size: Size, start: Coord, goal: Coord) -> Result<Self, GridError> {
        Self::from_walls(&Grid::new_copy(size, false), start, goal)
    }

    /// A grid whose walls are the `true` cells of `walls`. The start and goal
    /// cells are cleared even if `walls` marks them solid.
    pub fn from_walls(walls: &Grid<bool>, start: Coord, goal: Coord) -> Result<Self, GridError> {
        let size = walls.size();
        if size.width() == 0 || size.height() == 0 {
            return Err(GridError::EmptyGrid);
        }
        if walls.get(start).is_none() {
            return Err(GridError::OutsideGrid(start));
        }
        if walls.get(goal).is_none() {
            return Err(GridError::OutsideGrid(goal));
        }
        if start == goal {
            return Err(GridError::StartIsGoal(start));
        }
        let mut cells = Grid::new_fn(size, |coord| {
            if walls.get(coord).cloned().unwrap_or(false) {
                Cell::Wall
            } else {
                Cell::Empty
            }
        });
        if let Some(cell) = cells.get_mut(start) {
            *cell = Cell::Start;
        }
        if let Some(cell) = cells.get_mut(goal) {
            *cell = Cell::Goal;
        }
        Ok(Self { cells, start, goal })
    }

    /// Parses one string per row. See `Cell::from_char` for the characters.
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let size = Size::new(width as u32, height as u32);
        let mut cells = Grid::new_copy(size, Cell::Empty);
        let mut start = None;
        let mut goal = None;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: width,
                    found,
                });
            }
            for (j, ch) in row.chars().enumerate() {
                let coord = Coord::new(j as i32, i as i32);
                let cell = Cell::from_char(ch).ok_or(GridError::UnknownCell { coord, ch })?;
                match cell {
                    Cell::Start if start.is_some() => return Err(GridError::MultipleStarts(coord)),
                    Cell::Start => start = Some(coord),
                    Cell::Goal if goal.is_some() => return Err(GridError::MultipleGoals(coord)),
                    Cell::Goal => goal = Some(coord),
                    _ => (),
                }
                if let Some(slot) = cells.get_mut(coord) {
                    *slot = cell;
                }
            }
        }
        Ok(Self {
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            goal: goal.ok_or(GridError::MissingGoal)?,
        })
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord).cloned()
    }

    fn editable_cell(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        if coord == self.start || coord == self.goal {
            return Err(GridError::Occupied(coord));
        }
        self.cells.get_mut(coord).ok_or(GridError::OutsideGrid(coord))
    }

    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), GridError> {
        let cell = self.editable_cell(coord)?;
        *cell = if wall { Cell::Wall } else { Cell::Empty };
        Ok(())
    }

    /// Returns whether the cell is a wall after toggling.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, GridError> {
        let cell = self.editable_cell(coord)?;
        let wall = *cell != Cell::Wall;
        *cell = if wall { Cell::Wall } else { Cell::Empty };
        Ok(wall)
    }

    /// Annotates an empty cell with the direction a path entered it.
    /// Anything else is left alone.
    pub fn mark_step(&mut self, coord: Coord, direction: CardinalDirection) {
        if let Some(cell) = self.cells.get_mut(coord) {
            match *cell {
                Cell::Empty | Cell::Trail(_) => *cell = Cell::Trail(direction),
                _ => (),
            }
        }
    }

    /// Marks every step of a path starting at the grid's start.
    pub fn mark_path(&mut self, path: &[Coord]) {
        let start = self.start;
        for (coord, direction) in PathSteps::new(start, path) {
            self.mark_step(coord, direction);
        }
    }
}

impl PassableGrid for CellGrid {
    fn size(&self) -> Size {
        self.cells.size()
    }

    fn is_passable(&self, coord: Coord) -> Option<bool> {
        self.cells.get(coord).map(|cell| cell.is_passable())
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let ch = self.cell(Coord::new(x, y)).map_or(' ', Cell::to_char);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use grid_2d::Coord;
use std::fmt;

/// Failure to run a search at all. A search that runs and finds no path is
/// not an error; see `SearchStatus::NoPath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    VisitOutsideContext,
    CostOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::StartOutsideGrid => write!(f, "start is outside the grid"),
            Error::GoalOutsideGrid => write!(f, "goal is outside the grid"),
            Error::VisitOutsideContext => write!(f, "search context is smaller than the grid"),
            Error::CostOverflow => write!(f, "path cost does not fit the cost type"),
        }
    }
}

impl std::error::Error for Error {}

/// A grid that would break the one-start, one-goal invariant, or an edit
/// that cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownCell { coord: Coord, ch: char },
    MissingStart,
    MissingGoal,
    MultipleStarts(Coord),
    MultipleGoals(Coord),
    StartIsGoal(Coord),
    OutsideGrid(Coord),
    Occupied(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid has no cells"),
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::UnknownCell { coord, ch } => write!(
                f,
                "unknown cell {:?} at ({}, {})",
                ch, coord.x, coord.y
            ),
            GridError::MissingStart => write!(f, "grid has no start cell"),
            GridError::MissingGoal => write!(f, "grid has no goal cell"),
            GridError::MultipleStarts(c) => {
                write!(f, "second start cell at ({}, {})", c.x, c.y)
            }
            GridError::MultipleGoals(c) => write!(f, "second goal cell at ({}, {})", c.x, c.y),
            GridError::StartIsGoal(c) => {
                write!(f, "start and goal share the cell ({}, {})", c.x, c.y)
            }
            GridError::OutsideGrid(c) => write!(f, "({}, {}) is outside the grid", c.x, c.y),
            GridError::Occupied(c) => {
                write!(f, "({}, {}) holds the start or the goal", c.x, c.y)
            }
        }
    }
}

impl std::error::Error for GridError {}

use crate::error::GridError;
use crate::grid::{Cell, CellGrid};
use direction::CardinalDirection;
use grid_2d::Coord;

/// An edit applied to a grid before searching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the agent one cell, painting a wall on the cell it enters.
    MoveAgent(CardinalDirection),
    ToggleWall(Coord),
    PlaceWall(Coord),
    ClearWall(Coord),
}

/// Holds the cursor ("agent") used to draw walls interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Editor {
    agent: Coord,
}

impl Editor {
    pub fn new(agent: Coord) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> Coord {
        self.agent
    }

    pub fn apply(&mut self, grid: &mut CellGrid, command: Command) -> Result<(), GridError> {
        match command {
            Command::MoveAgent(direction) => {
                self.agent = clamp(self.agent + direction.coord(), grid);
                // the start and goal survive being walked over
                if let Some(Cell::Empty) | Some(Cell::Trail(_)) = grid.cell(self.agent) {
                    grid.set_wall(self.agent, true)?;
                }
                Ok(())
            }
            Command::ToggleWall(coord) => grid.toggle_wall(coord).map(|_| ()),
            Command::PlaceWall(coord) => grid.set_wall(coord, true),
            Command::ClearWall(coord) => grid.set_wall(coord, false),
        }
    }
}

fn clamp(coord: Coord, grid: &CellGrid) -> Coord {
    let max_x = grid.width() as i32 - 1;
    let max_y = grid.height() as i32 - 1;
    Coord::new(coord.x.max(0).min(max_x), coord.y.max(0).min(max_y))
}

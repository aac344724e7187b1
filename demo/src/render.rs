use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use grid_astar::{CardinalDirection, Cell, CellGrid, Coord};
use std::io::{self, Write};

const AGENT: char = '@';

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::Wall => '█',
        Cell::Start => '◉',
        Cell::Goal => '★',
        Cell::Trail(CardinalDirection::North) => '⮝',
        Cell::Trail(CardinalDirection::East) => '⮞',
        Cell::Trail(CardinalDirection::South) => '⮟',
        Cell::Trail(CardinalDirection::West) => '⮜',
    }
}

/// Redraws the whole grid from the top-left corner, followed by one footer
/// line. Lines end in "\r\n" since the terminal is in raw mode.
pub fn draw<W: Write>(
    out: &mut W,
    grid: &CellGrid,
    agent: Option<Coord>,
    footer: &str,
) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    let mut line = String::with_capacity(grid.width() as usize);
    for y in 0..grid.height() as i32 {
        line.clear();
        for x in 0..grid.width() as i32 {
            let coord = Coord::new(x, y);
            if agent == Some(coord) {
                line.push(AGENT);
            } else {
                line.push(grid.cell(coord).map_or(' ', glyph));
            }
        }
        queue!(out, Print(&line), Print("\r\n"))?;
    }
    queue!(out, Print(footer), Print("\r\n"))?;
    out.flush()
}

/// Raw mode with a hidden cursor for as long as this value lives.
pub struct RawTerminal;

impl RawTerminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(RawTerminal)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

mod render;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use grid_astar::{
    CardinalDirection, CellGrid, Command, Coord, Editor, PathSteps, SearchConfig, SearchContext,
    SearchStatus, Size,
};
use grid_astar_maze::Scenario;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;
use render::RawTerminal;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EDIT_HELP: &str = "w/a/s/d: move and draw walls  space: toggle wall  p: search  q: quit";

#[derive(Debug, Parser)]
#[command(
    name = "astar-demo",
    version,
    about = "Draw walls on a grid, then watch A* walk to the goal"
)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    rows: u32,

    /// Grid width in cells
    #[arg(long, default_value_t = 80)]
    cols: u32,

    /// Pause between path steps, in milliseconds
    #[arg(long, default_value_t = 400)]
    delay_ms: u64,

    /// Seed for goal and wall placement
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a cell starts out as a wall
    #[arg(long, default_value_t = 0.0)]
    wall_density: f64,

    /// Start from a generated maze (ignores --wall-density)
    #[arg(long)]
    maze: bool,

    /// Search straight away instead of editing first
    #[arg(long = "static")]
    static_grid: bool,
}

enum Input {
    Edit(Command),
    Search,
    Quit,
}

fn read_input(agent: Coord) -> io::Result<Option<Input>> {
    let (code, modifiers) = match event::read()? {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => (code, modifiers),
        _ => return Ok(None),
    };
    let input = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('w') | KeyCode::Up => Input::Edit(Command::MoveAgent(CardinalDirection::North)),
        KeyCode::Char('a') | KeyCode::Left => Input::Edit(Command::MoveAgent(CardinalDirection::West)),
        KeyCode::Char('s') | KeyCode::Down => Input::Edit(Command::MoveAgent(CardinalDirection::South)),
        KeyCode::Char('d') | KeyCode::Right => Input::Edit(Command::MoveAgent(CardinalDirection::East)),
        KeyCode::Char(' ') => Input::Edit(Command::ToggleWall(agent)),
        KeyCode::Char('p') | KeyCode::Enter => Input::Search,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return Ok(None),
    };
    Ok(Some(input))
}

/// Lets the user edit the grid, then searches and animates the path.
/// Returns `None` if the user quit before searching.
fn run<W: Write>(out: &mut W, grid: &mut CellGrid, args: &Args) -> Result<Option<SearchStatus>> {
    if !args.static_grid {
        let start = grid.start();
        let mut editor = Editor::new(Coord::new((start.x - 1).max(0), start.y));
        loop {
            render::draw(out, grid, Some(editor.agent()), EDIT_HELP)?;
            match read_input(editor.agent())? {
                Some(Input::Edit(command)) => {
                    if let Err(err) = editor.apply(grid, command) {
                        log::debug!("ignored {:?}: {}", command, err);
                    }
                }
                Some(Input::Search) => break,
                Some(Input::Quit) => return Ok(None),
                None => (),
            }
        }
    }

    let mut ctx: SearchContext<u32> = SearchContext::new(grid.size());
    let mut path = Vec::new();
    let metadata = ctx.astar(
        &*grid,
        grid.start(),
        grid.goal(),
        SearchConfig::default(),
        &mut path,
    )?;
    log::info!(
        "{} after visiting {} cells, path length {}",
        metadata.status,
        metadata.num_nodes_visited,
        metadata.length
    );

    let start = grid.start();
    let delay = Duration::from_millis(args.delay_ms);
    for (steps, (coord, direction)) in PathSteps::new(start, &path).enumerate() {
        grid.mark_step(coord, direction);
        render::draw(out, grid, None, &format!("Steps: {}", steps + 1))?;
        thread::sleep(delay);
    }
    render::draw(
        out,
        grid,
        None,
        &format!("Steps: {}  {}", path.len(), metadata.status),
    )?;

    Ok(Some(metadata.status))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    ensure!(
        args.rows > 0 && args.cols > 0 && u64::from(args.rows) * u64::from(args.cols) >= 2,
        "the grid needs at least two cells"
    );

    let size = Size::new(args.cols, args.rows);
    let mut rng = match args.seed {
        Some(seed) => Isaac64Rng::seed_from_u64(seed),
        None => Isaac64Rng::from_entropy(),
    };
    let start = Coord::new(args.cols as i32 / 2, args.rows as i32 / 2);
    let scenario = if args.maze {
        Scenario::maze(size, start, &mut rng)
    } else if args.wall_density > 0.0 {
        Scenario::scattered(size, args.wall_density, start, &mut rng)
    } else {
        Scenario::open(size, start, &mut rng)
    }
    .context("could not place a start and a goal")?;
    let mut grid = CellGrid::from_walls(&scenario.walls, scenario.start, scenario.goal)?;
    log::info!(
        "{}x{} grid, start {:?}, goal {:?}",
        args.cols,
        args.rows,
        grid.start(),
        grid.goal()
    );

    let status = {
        let _terminal = RawTerminal::enter()?;
        run(&mut io::stdout(), &mut grid, &args)?
    };

    if let Some(status) = status {
        println!("{}", status);
    }
    Ok(())
}

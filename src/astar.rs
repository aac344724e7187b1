use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::heuristic::manhattan_distance;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::{CheckedAdd, NumCast, One, Zero};

fn manhattan_distance_cost<Cost: NumCast>(a: Coord, b: Coord) -> Result<Cost, Error> {
    NumCast::from(manhattan_distance(b, a)).ok_or(Error::CostOverflow)
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + PartialOrd<Cost> + CheckedAdd + Zero + One + NumCast,
{
    /// A* from `start` to `goal` over 4-connected unit-cost moves, guided by
    /// the Manhattan distance.
    ///
    /// On `SearchStatus::GoalFound`, `path` holds the cells after `start` up
    /// to and including `goal`. Otherwise `path` is left empty.
    pub fn astar<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: PassableGrid,
    {
        self.search_general(
            grid,
            start,
            goal,
            manhattan_distance_cost::<Cost>,
            config,
            path,
        )
    }
}

/// Runs A* between the start and goal markers of `grid` with a fresh
/// context, returning the path alongside the search outcome.
pub fn find_path(grid: &CellGrid) -> Result<(SearchMetadata<u32>, Vec<Coord>), Error> {
    let mut ctx = SearchContext::new(grid.size());
    let mut path = Vec::new();
    let metadata = ctx.astar(
        grid,
        grid.start(),
        grid.goal(),
        SearchConfig::default(),
        &mut path,
    )?;
    Ok((metadata, path))
}

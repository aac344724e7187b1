use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::{CheckedAdd, One, Zero};

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + PartialOrd<Cost> + CheckedAdd + Zero + One,
{
    /// The same search as `astar` with no heuristic guidance.
    pub fn dijkstra<G>(
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
        self.search_general(grid, start, goal, |_, _| Ok(Zero::zero()), config, path)
    }
}

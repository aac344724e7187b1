use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::path::{self, PathNode};
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use num_traits::{CheckedAdd, One, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) seen: u64,
    pub(crate) visited: u64,
    pub(crate) coord: Coord,
    pub(crate) from_parent: Option<CardinalDirection>,
    pub(crate) cost: Cost,
    pub(crate) estimate: Cost,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
            cost: Zero::zero(),
            estimate: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for SearchNode<Cost> {
    fn seen(&self) -> u64 {
        self.seen
    }
    fn from_parent(&self) -> Option<CardinalDirection> {
        self.from_parent
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost: PartialOrd<Cost>> {
    pub(crate) coord: Coord,
    pub(crate) cost: Cost,
    pub(crate) insertion: u64,
}

impl<Cost: PartialOrd<Cost>> PriorityEntry<Cost> {
    fn new(coord: Coord, cost: Cost, insertion: u64) -> Self {
        Self {
            coord,
            cost,
            insertion,
        }
    }
}

impl<Cost: PartialOrd<Cost>> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: PartialOrd<Cost>> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: PartialOrd<Cost>> Eq for PriorityEntry<Cost> {}

impl<Cost: PartialOrd<Cost>> Ord for PriorityEntry<Cost> {
    // BinaryHeap is a max-heap: lowest cost first, then earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.insertion.cmp(&self.insertion))
    }
}

/// Reusable state for A* and Dijkstra searches over grids no larger than
/// the context.
///
/// Each search starts a new generation (`seq`), which invalidates every
/// cost, predecessor and explored mark of the previous search without
/// touching the node grid.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost: PartialOrd<Cost>> {
    pub(crate) seq: u64,
    pub(crate) insertion: u64,
    pub(crate) priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    pub(crate) node_grid: Grid<SearchNode<Cost>>,
}

impl<Cost: Copy + PartialOrd<Cost> + Zero> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            insertion: 0,
            node_grid: Grid::new_fn(size, SearchNode::new),
            priority_queue: BinaryHeap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.node_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.node_grid.height()
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    /// Best path found by the latest search from its start to `goal`,
    /// excluding the start and including `goal`. Empty if the latest search
    /// never reached `goal`, or if `goal` was the start.
    pub fn trace_path(&self, goal: Coord, path: &mut Vec<Coord>) {
        path::make_path_all_adjacent(&self.node_grid, self.seq, goal, path);
    }

    /// Best known cost from the latest search's start to `coord`.
    pub fn cost(&self, coord: Coord) -> Option<Cost> {
        self.node_grid
            .get(coord)
            .filter(|node| node.seen == self.seq && self.seq != 0)
            .map(|node| node.cost)
    }

    /// Cost to `coord` plus the heuristic estimate from `coord` to the goal,
    /// as recorded by the latest search.
    pub fn estimate(&self, coord: Coord) -> Option<Cost> {
        self.node_grid
            .get(coord)
            .filter(|node| node.seen == self.seq && self.seq != 0)
            .map(|node| node.estimate)
    }
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + PartialOrd<Cost> + CheckedAdd + Zero + One,
{
    fn init<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        initial_estimate: Cost,
        path: &mut Vec<Coord>,
    ) -> Result<PriorityEntry<Cost>, Result<SearchMetadata<Cost>, Error>>
    where
        G: PassableGrid,
    {
        if grid.is_passable(start).is_none() {
            return Err(Err(Error::StartOutsideGrid));
        }
        if grid.is_passable(goal).is_none() {
            return Err(Err(Error::GoalOutsideGrid));
        }

        self.seq += 1;
        self.insertion = 0;
        self.priority_queue.clear();
        path.clear();

        let node = match self.node_grid.get_mut(start) {
            Some(node) => node,
            None => return Err(Err(Error::VisitOutsideContext)),
        };
        node.from_parent = None;
        node.seen = self.seq;
        node.cost = Zero::zero();
        node.estimate = initial_estimate;

        if start == goal {
            return Err(Ok(SearchMetadata {
                status: SearchStatus::GoalFound,
                num_nodes_visited: 0,
                cost: Zero::zero(),
                length: 0,
            }));
        }

        Ok(PriorityEntry::new(start, initial_estimate, 0))
    }

    pub(crate) fn search_general<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: PassableGrid,
        H: Fn(Coord, Coord) -> Result<Cost, Error>,
    {
        let initial_estimate = heuristic_fn(start, goal)?;
        let initial_entry = match self.init(grid, start, goal, initial_estimate, path) {
            Ok(initial_entry) => initial_entry,
            Err(result) => return result,
        };

        self.priority_queue.push(initial_entry);

        let mut num_nodes_visited = 0;

        while let Some(current_entry) = self.priority_queue.pop() {
            let (current_coord, current_cost) = {
                let node = self
                    .node_grid
                    .get_mut(current_entry.coord)
                    .ok_or(Error::VisitOutsideContext)?;
                if node.visited == self.seq {
                    continue;
                }
                if num_nodes_visited >= config.max_nodes_visited {
                    log::debug!(
                        "search from {:?} to {:?} stopped after {} expansions",
                        start,
                        goal,
                        num_nodes_visited
                    );
                    return Ok(SearchMetadata {
                        status: SearchStatus::BudgetExhausted,
                        num_nodes_visited,
                        cost: Zero::zero(),
                        length: 0,
                    });
                }
                node.visited = self.seq;
                (node.coord, node.cost)
            };

            num_nodes_visited += 1;

            if current_coord == goal {
                path::make_path_all_adjacent(&self.node_grid, self.seq, goal, path);
                log::debug!(
                    "found path from {:?} to {:?} of length {} after {} expansions",
                    start,
                    goal,
                    path.len(),
                    num_nodes_visited
                );
                return Ok(SearchMetadata {
                    status: SearchStatus::GoalFound,
                    num_nodes_visited,
                    cost: current_cost,
                    length: path.len(),
                });
            }

            log::trace!("expanding {:?}", current_coord);

            let successor_cost = current_cost
                .checked_add(&One::one())
                .ok_or(Error::CostOverflow)?;

            for (neighbour_coord, direction) in grid.neighbours(current_coord) {
                self.see_successor(
                    successor_cost,
                    neighbour_coord,
                    direction,
                    &heuristic_fn,
                    goal,
                )?;
            }
        }

        log::debug!(
            "no path from {:?} to {:?} after {} expansions",
            start,
            goal,
            num_nodes_visited
        );

        Ok(SearchMetadata {
            status: SearchStatus::NoPath,
            num_nodes_visited,
            cost: Zero::zero(),
            length: 0,
        })
    }

    fn see_successor<H>(
        &mut self,
        cost: Cost,
        successor_coord: Coord,
        direction: CardinalDirection,
        heuristic_fn: H,
        goal: Coord,
    ) -> Result<(), Error>
    where
        H: Fn(Coord, Coord) -> Result<Cost, Error>,
    {
        let node = self
            .node_grid
            .get_mut(successor_coord)
            .ok_or(Error::VisitOutsideContext)?;

        if node.visited == self.seq {
            return Ok(());
        }

        if node.seen != self.seq || node.cost > cost {
            let estimate = cost
                .checked_add(&heuristic_fn(successor_coord, goal)?)
                .ok_or(Error::CostOverflow)?;

            node.from_parent = Some(direction);
            node.seen = self.seq;
            node.cost = cost;
            node.estimate = estimate;

            self.insertion += 1;
            let entry = PriorityEntry::new(successor_coord, estimate, self.insertion);
            self.priority_queue.push(entry);
        }

        Ok(())
    }
}

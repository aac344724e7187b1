use crate::error::*;
use crate::grid::PassableGrid;
use crate::metadata::*;
use crate::path::{self, PathNode};
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct BfsNode {
    seen: u64,
    from_parent: Option<CardinalDirection>,
}

impl PathNode for BfsNode {
    fn seen(&self) -> u64 {
        self.seen
    }
    fn from_parent(&self) -> Option<CardinalDirection> {
        self.from_parent
    }
}

impl BfsNode {
    fn new(_: Coord) -> Self {
        Self {
            seen: 0,
            from_parent: None,
        }
    }
}

/// Breadth-first search with the same neighbour rule and expansion order as
/// the A* search. On a unit-cost grid it finds shortest paths without any
/// heuristic, which makes it a reference to check A* against.
#[derive(Debug, Clone)]
pub struct BfsContext {
    seq: u64,
    queue: VecDeque<Coord>,
    node_grid: Grid<BfsNode>,
}

impl BfsContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, BfsNode::new),
            queue: VecDeque::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    pub fn bfs<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<usize>, Error>
    where
        G: PassableGrid,
    {
        if grid.is_passable(start).is_none() {
            return Err(Error::StartOutsideGrid);
        }
        if grid.is_passable(goal).is_none() {
            return Err(Error::GoalOutsideGrid);
        }

        path.clear();
        if start == goal {
            return Ok(SearchMetadata {
                status: SearchStatus::GoalFound,
                num_nodes_visited: 0,
                cost: 0,
                length: 0,
            });
        }

        self.seq += 1;
        self.queue.clear();

        let node = self
            .node_grid
            .get_mut(start)
            .ok_or(Error::VisitOutsideContext)?;
        node.from_parent = None;
        node.seen = self.seq;
        self.queue.push_back(start);

        let mut num_nodes_visited = 0;

        while let Some(current_coord) = self.queue.pop_front() {
            num_nodes_visited += 1;

            for (neighbour_coord, direction) in grid.neighbours(current_coord) {
                let node = self
                    .node_grid
                    .get_mut(neighbour_coord)
                    .ok_or(Error::VisitOutsideContext)?;
                if node.seen == self.seq {
                    continue;
                }
                node.seen = self.seq;
                node.from_parent = Some(direction);

                if neighbour_coord == goal {
                    path::make_path_all_adjacent(&self.node_grid, self.seq, goal, path);
                    let length = path.len();
                    return Ok(SearchMetadata {
                        status: SearchStatus::GoalFound,
                        num_nodes_visited,
                        cost: length,
                        length,
                    });
                }

                self.queue.push_back(neighbour_coord);
            }
        }

        Ok(SearchMetadata {
            status: SearchStatus::NoPath,
            num_nodes_visited,
            cost: 0,
            length: 0,
        })
    }
}

use grid_2d::Coord;

/// Scale applied to the Manhattan distance. Matches the unit step cost, so
/// the estimate stays admissible and consistent.
pub const HEURISTIC_WEIGHT: u32 = 1;

/// Manhattan distance from `node` to `goal`, the estimate of remaining cost
/// used by A*. Saturates at `u32::MAX` for coordinates further apart than
/// that, which keeps it admissible.
pub fn manhattan_distance(goal: Coord, node: Coord) -> u32 {
    let dx = (i64::from(node.x) - i64::from(goal.x)).abs() as u32;
    let dy = (i64::from(node.y) - i64::from(goal.y)).abs() as u32;
    dx.saturating_add(dy).saturating_mul(HEURISTIC_WEIGHT)
}

use std::fmt;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    GoalFound,
    NoPath,
    BudgetExhausted,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchStatus::GoalFound => write!(f, "goal found"),
            SearchStatus::NoPath => write!(f, "no path found"),
            SearchStatus::BudgetExhausted => write!(f, "search budget exhausted"),
        }
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata<C> {
    pub status: SearchStatus,
    pub num_nodes_visited: usize,
    pub cost: C,
    pub length: usize,
}

impl<C> SearchMetadata<C> {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::GoalFound
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on node expansions. A search that reaches it stops with
    /// `SearchStatus::BudgetExhausted`.
    pub max_nodes_visited: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes_visited: ::std::usize::MAX,
        }
    }
}

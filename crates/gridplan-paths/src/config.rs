//! Search configuration.

/// How the planner treats a node that is reached again after it was first
/// discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// A node's branch record is written once, when the node is first
    /// discovered, and never updated. A cheaper route found later is ignored,
    /// so the returned path can be suboptimal even with an admissible
    /// heuristic. This is the default.
    #[default]
    FirstDiscovery,
    /// Classical A*: a strictly cheaper route overwrites the branch record and
    /// re-queues the node. Returns least-cost paths for consistent heuristics.
    Reopen,
}

/// Options for a [`Planner`](crate::Planner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Relaxation policy.
    pub relaxation: Relaxation,
    /// Stop with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
    /// once this many nodes have been expanded without reaching the goal.
    /// `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Default configuration: first-discovery-wins, unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relaxation policy.
    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Bound the number of node expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

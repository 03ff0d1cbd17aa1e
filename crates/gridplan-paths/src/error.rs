//! Search errors.

use std::fmt;

use gridplan_core::Position;

/// Reasons a search could not run to completion.
///
/// Not finding a path is not an error: [`Planner::search`](crate::Planner::search)
/// reports it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start position lies outside the grid.
    StartOutOfBounds(Position),
    /// The goal position lies outside the grid.
    GoalOutOfBounds(Position),
    /// The start cell is occupied.
    StartBlocked(Position),
    /// The goal cell is occupied.
    GoalBlocked(Position),
    /// The expansion budget ran out before the goal was reached.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the grid"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the grid"),
            Self::StartBlocked(p) => write!(f, "start {p} is an occupied cell"),
            Self::GoalBlocked(p) => write!(f, "goal {p} is an occupied cell"),
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after {limit} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}

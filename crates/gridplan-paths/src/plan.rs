use std::cmp::Ordering;

use gridplan_core::Position;

use crate::action::Action;

/// A path found by the planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Positions from start to goal, both included.
    pub path: Vec<Position>,
    /// The action taken at each step; `actions[i]` moves `path[i]` to
    /// `path[i + 1]`.
    pub actions: Vec<Action>,
    /// Sum of the action costs along the path.
    pub cost: f64,
    /// Number of nodes expanded by the search.
    pub expanded: usize,
}

impl Plan {
    /// Number of positions in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false` for a plan returned by the planner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First position of the path.
    pub fn start(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Last position of the path.
    pub fn goal(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Iterate over `(from, action)` steps.
    pub fn steps(&self) -> impl Iterator<Item = (Position, Action)> + '_ {
        self.path.iter().copied().zip(self.actions.iter().copied())
    }

    /// Split into the `(path, cost)` pair.
    pub fn into_parts(self) -> (Vec<Position>, f64) {
        (self.path, self.cost)
    }
}

// ---------------------------------------------------------------------------
// Internal bookkeeping for the search loop
// ---------------------------------------------------------------------------

/// How a discovered node was reached.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BranchRecord {
    pub(crate) cost: f64,
    pub(crate) parent: Position,
    pub(crate) action: Action,
}

/// Queue entry, ordered for use in `BinaryHeap`.
///
/// Lowest `priority` pops first; equal priorities pop in insertion order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) cost: f64,
    pub(crate) pos: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then smallest seq.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

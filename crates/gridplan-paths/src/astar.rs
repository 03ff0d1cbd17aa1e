use std::collections::{BinaryHeap, HashMap, HashSet};

use gridplan_core::{OccupancyGrid, Position};

use crate::action::valid_actions_into;
use crate::config::{Relaxation, SearchConfig};
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::plan::{BranchRecord, FrontierEntry, Plan};

/// A* planner over an [`OccupancyGrid`].
///
/// The planner holds only configuration; every call to
/// [`search`](Planner::search) owns its own queue and bookkeeping, so one
/// planner (and one grid) can serve concurrent searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    config: SearchConfig,
}

impl Planner {
    /// Create a planner with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Ok(Some(plan))` when the goal is reached, `Ok(None)` when the
    /// frontier runs dry first, and `Err` for invalid endpoints or an
    /// exhausted expansion budget.
    ///
    /// The frontier is seeded with `start` at priority 0; every other entry
    /// has priority `cost + heuristic(node, goal)`. Equal priorities pop in
    /// insertion order. The search stops as soon as `goal` is popped.
    pub fn search<H: Heuristic + ?Sized>(
        &self,
        grid: &OccupancyGrid,
        heuristic: &H,
        start: Position,
        goal: Position,
    ) -> Result<Option<Plan>, SearchError> {
        validate(grid, start, goal)?;

        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(FrontierEntry {
            priority: 0.0,
            seq,
            cost: 0.0,
            pos: start,
        });

        let mut discovered: HashSet<Position> = HashSet::from([start]);
        let mut branch: HashMap<Position, BranchRecord> = HashMap::new();
        let mut expanded: usize = 0;
        let mut abuf = Vec::with_capacity(8);
        let reopen = self.config.relaxation == Relaxation::Reopen;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let pos = current.pos;
            let current_cost = if pos == start {
                0.0
            } else {
                branch.get(&pos).map_or(current.cost, |r| r.cost)
            };

            // Superseded by a cheaper entry (only happens when reopening).
            if current.cost > current_cost {
                continue;
            }

            if pos == goal {
                break 'search true;
            }

            if let Some(limit) = self.config.max_expansions {
                if expanded >= limit {
                    log::debug!("search {start} -> {goal}: budget of {limit} expansions spent");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }
            expanded += 1;
            log::trace!("expand {pos} cost={current_cost:.3} priority={:.3}", current.priority);

            abuf.clear();
            valid_actions_into(grid, pos, &mut abuf);

            for &action in abuf.iter() {
                let next = action.apply(pos);
                let branch_cost = current_cost + action.cost();

                // First discovery, or a strictly cheaper route when reopening.
                let accept = discovered.insert(next)
                    || (reopen && branch.get(&next).is_some_and(|r| branch_cost < r.cost));
                if !accept {
                    continue;
                }

                branch.insert(
                    next,
                    BranchRecord {
                        cost: branch_cost,
                        parent: pos,
                        action,
                    },
                );
                seq += 1;
                open.push(FrontierEntry {
                    priority: branch_cost + heuristic.estimate(next, goal),
                    seq,
                    cost: branch_cost,
                    pos: next,
                });
            }
        };

        if !found {
            log::debug!(
                "search {start} -> {goal}: no path ({expanded} expanded, {} discovered)",
                discovered.len()
            );
            return Ok(None);
        }

        let plan = reconstruct(&branch, start, goal, expanded);
        log::debug!(
            "search {start} -> {goal}: found {} steps, cost {:.3}, {expanded} expanded",
            plan.actions.len(),
            plan.cost
        );
        Ok(Some(plan))
    }
}

/// Reject endpoints the search cannot start from or finish at.
fn validate(grid: &OccupancyGrid, start: Position, goal: Position) -> Result<(), SearchError> {
    if !grid.contains(start) {
        return Err(SearchError::StartOutOfBounds(start));
    }
    if !grid.contains(goal) {
        return Err(SearchError::GoalOutOfBounds(goal));
    }
    if grid.is_blocked(start) {
        return Err(SearchError::StartBlocked(start));
    }
    if grid.is_blocked(goal) {
        return Err(SearchError::GoalBlocked(goal));
    }
    Ok(())
}

/// Walk parent links back from `goal` to `start`.
fn reconstruct(
    branch: &HashMap<Position, BranchRecord>,
    start: Position,
    goal: Position,
    expanded: usize,
) -> Plan {
    let cost = if goal == start {
        0.0
    } else {
        branch.get(&goal).map_or(0.0, |r| r.cost)
    };

    let mut path = vec![goal];
    let mut actions = Vec::new();
    let mut n = goal;
    while n != start {
        let Some(r) = branch.get(&n) else {
            break;
        };
        actions.push(r.action);
        n = r.parent;
        path.push(n);
    }
    path.reverse();
    actions.reverse();

    Plan {
        path,
        actions,
        cost,
        expanded,
    }
}

/// Search with the default configuration (first-discovery-wins, unbounded).
///
/// See [`Planner::search`].
pub fn search<H: Heuristic + ?Sized>(
    grid: &OccupancyGrid,
    heuristic: &H,
    start: Position,
    goal: Position,
) -> Result<Option<Plan>, SearchError> {
    Planner::default().search(grid, heuristic, start, goal)
}

/// Search with the default configuration and return `(path, cost)`.
///
/// An empty path with cost `0` means no path was found, including when an
/// endpoint is outside the grid or blocked. Use [`search`] to tell those
/// cases apart.
pub fn a_star<H: Heuristic + ?Sized>(
    grid: &OccupancyGrid,
    heuristic: &H,
    start: Position,
    goal: Position,
) -> (Vec<Position>, f64) {
    match search(grid, heuristic, start, goal) {
        Ok(Some(plan)) => plan.into_parts(),
        Ok(None) => (Vec::new(), 0.0),
        Err(e) => {
            log::warn!("a_star: {e}");
            (Vec::new(), 0.0)
        }
    }
}

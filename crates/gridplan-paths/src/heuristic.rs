//! Heuristics: estimates of the remaining cost to the goal.
//!
//! The planner accepts anything implementing [`Heuristic`], including plain
//! closures `Fn(Position, Position) -> f64`. For A* to return least-cost
//! paths the estimate must be admissible (never above the true remaining
//! cost) and consistent. The planner does not check either property.

use std::f64::consts::SQRT_2;

use gridplan_core::Position;

/// Estimate of the cost from `node` to `goal`.
pub trait Heuristic {
    /// Must be non-negative and should never overestimate.
    fn estimate(&self, node: Position, goal: Position) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Position, Position) -> f64,
{
    #[inline]
    fn estimate(&self, node: Position, goal: Position) -> f64 {
        self(node, goal)
    }
}

#[inline]
fn abs_delta(a: Position, b: Position) -> (f64, f64) {
    (
        f64::from((a.row - b.row).abs()),
        f64::from((a.col - b.col).abs()),
    )
}

/// Always zero. Turns A* into Dijkstra's algorithm.
#[inline]
pub fn zero(_node: Position, _goal: Position) -> f64 {
    0.0
}

/// Straight-line (L2) distance.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let (dr, dc) = abs_delta(a, b);
    dr.hypot(dc)
}

/// Manhattan (L1) distance. Not admissible with diagonal moves.
#[inline]
pub fn manhattan(a: Position, b: Position) -> f64 {
    let (dr, dc) = abs_delta(a, b);
    dr + dc
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> f64 {
    let (dr, dc) = abs_delta(a, b);
    dr.max(dc)
}

/// Octile distance: the exact cost on an obstacle-free 8-connected grid where
/// diagonals cost `√2`.
#[inline]
pub fn octile(a: Position, b: Position) -> f64 {
    let (dr, dc) = abs_delta(a, b);
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    (hi - lo) + lo * SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(zero(a, b), 0.0);
        assert!((euclidean(a, b) - 5.0).abs() < EPS);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert!((octile(a, b) - (1.0 + 3.0 * SQRT_2)).abs() < EPS);
    }

    #[test]
    fn symmetric_and_zero_at_goal() {
        let a = Position::new(-2, 5);
        let b = Position::new(7, 1);
        for h in [zero, euclidean, manhattan, chebyshev, octile] {
            assert_eq!(h(a, b), h(b, a));
            assert_eq!(h(a, a), 0.0);
        }
    }

    #[test]
    fn admissible_ordering() {
        // On an 8-connected grid: chebyshev <= euclidean <= octile.
        let a = Position::new(1, 2);
        let b = Position::new(8, 4);
        assert!(chebyshev(a, b) <= euclidean(a, b));
        assert!(euclidean(a, b) <= octile(a, b) + EPS);
    }

    #[test]
    fn closures_are_heuristics() {
        let weight = 2.0;
        let weighted = move |n: Position, g: Position| weight * octile(n, g);
        let a = Position::new(0, 0);
        let b = Position::new(0, 3);
        assert_eq!(weighted.estimate(a, b), 6.0);
        assert_eq!(octile.estimate(a, b), 3.0);
    }
}

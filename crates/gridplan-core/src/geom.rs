//! Geometry primitives: [`Position`] and [`Bounds`].
//!
//! Coordinates are matrix-style: `row` grows downwards, `col` grows to the
//! right. A grid of shape `(rows, cols)` covers rows `0..rows` and columns
//! `0..cols`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell identified by `(row, col)`.
///
/// Signed so that a neighbour one step off the top or left edge is still a
/// representable value that bounds checks can reject.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by `(dr, dc)`.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether the two positions are 8-connected neighbours.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        let d = other - self;
        d != Self::ZERO && d.row.abs() <= 1 && d.col.abs() <= 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    #[inline]
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The shape of a grid: positions with `0 <= row < rows` and
/// `0 <= col < cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds cover no cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` is inside the bounds.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Position::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Position;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Position,
}

impl Iterator for BoundsIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let cols = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn position_arithmetic() {
        let a = Position::new(1, 2);
        let b = Position::new(3, 4);
        assert_eq!(a + b, Position::new(4, 6));
        assert_eq!(b - a, Position::new(2, 2));
        assert_eq!(a.offset(-1, 1), Position::new(0, 3));
    }

    #[test]
    fn position_tuple_conversion() {
        let p: Position = (4, 7).into();
        assert_eq!(p, Position::new(4, 7));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (4, 7));
    }

    #[test]
    fn position_hash_is_per_cell() {
        // A set holding one position has exactly one element, not one per coordinate.
        let set: HashSet<Position> = [Position::new(2, 5)].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Position::new(2, 5)));
        assert!(!set.contains(&Position::new(5, 2)));
    }

    #[test]
    fn position_ordering_is_row_major() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn adjacency() {
        let p = Position::new(3, 3);
        assert!(p.is_adjacent(Position::new(2, 2)));
        assert!(p.is_adjacent(Position::new(3, 4)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(5, 3)));
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert!(!b.is_empty());
        assert!(b.contains(Position::new(0, 0)));
        assert!(b.contains(Position::new(1, 2)));
        assert!(!b.contains(Position::new(2, 0)));
        assert!(!b.contains(Position::new(0, 3)));
        assert!(!b.contains(Position::new(-1, 0)));
    }

    #[test]
    fn bounds_negative_clamped() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn bounds_index() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.index(Position::new(0, 0)), Some(0));
        assert_eq!(b.index(Position::new(2, 1)), Some(9));
        assert_eq!(b.index(Position::new(3, 0)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let ps: Vec<_> = it.collect();
        assert_eq!(ps[0], Position::new(0, 0));
        assert_eq!(ps[2], Position::new(0, 2));
        assert_eq!(ps[3], Position::new(1, 0));
        assert_eq!(ps[5], Position::new(1, 2));
    }
}

//! The [`OccupancyGrid`] type — an immutable 2D matrix of free and blocked
//! cells.
//!
//! A cell value of `0` is free; any non-zero value is blocked. The grid owns
//! its storage outright, so a `&OccupancyGrid` can be handed to any number of
//! concurrent readers.

use std::fmt;

use crate::geom::{Bounds, Position};

/// Cell value for a free cell.
pub const FREE: u8 = 0;
/// Canonical cell value for a blocked cell.
pub const BLOCKED: u8 = 1;

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows, or only empty rows.
    Empty,
    /// A row's width differs from the first row's width.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet was found.
    InvalidCell { ch: char, pos: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidCell { ch, pos } => {
                write!(f, "grid: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable occupancy grid of shape `(rows, cols)`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupancyGrid {
    cells: Vec<u8>,
    bounds: Bounds,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![FREE; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from a list of rows. All rows must have the same width.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// Build a grid by evaluating `f` at every position in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Position) -> u8) -> Self {
        let bounds = Bounds::new(rows, cols);
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// Return a copy of this grid with the given positions blocked.
    /// Positions outside the grid are ignored.
    pub fn with_blocked(&self, positions: impl IntoIterator<Item = Position>) -> Self {
        let mut cells = self.cells.clone();
        for p in positions {
            if let Some(i) = self.bounds.index(p) {
                cells[i] = BLOCKED;
            }
        }
        Self {
            cells,
            bounds: self.bounds,
        }
    }

    /// The shape of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Raw cell value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Position) -> Option<u8> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Position) -> bool {
        self.get(p) == Some(FREE)
    }

    /// Whether `p` is inside the grid and blocked.
    #[inline]
    pub fn is_blocked(&self, p: Position) -> bool {
        matches!(self.get(p), Some(v) if v != FREE)
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|&&v| v != FREE).count()
    }

    /// Iterate over `(Position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[u8]> {
        // `max(1)` keeps `chunks` happy on an empty grid; there are no cells then.
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }
}

impl fmt::Display for OccupancyGrid {
    /// Render as a text map: `.` for free, `#` for blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &v in row {
                f.write_str(if v == FREE { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OccupancyGrid {
    /// Serialized as a list of rows.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.row_slices())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OccupancyGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        OccupancyGrid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_free() {
        let g = OccupancyGrid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count_blocked(), 0);
        assert!(g.is_free(Position::new(2, 3)));
        assert!(!g.is_free(Position::new(3, 0)));
    }

    #[test]
    fn from_rows_reads_row_major() {
        let g = OccupancyGrid::from_rows(&[[0u8, 1, 0], [0, 0, 1]]).unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 3));
        assert!(g.is_blocked(Position::new(0, 1)));
        assert!(g.is_blocked(Position::new(1, 2)));
        assert!(g.is_free(Position::new(1, 1)));
        assert_eq!(g.get(Position::new(0, 1)), Some(1));
        assert_eq!(g.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 0, 0], vec![0, 0]];
        assert_eq!(
            OccupancyGrid::from_rows(&rows),
            Err(GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert_eq!(OccupancyGrid::from_rows(&rows), Err(GridError::Empty));
        let rows: Vec<Vec<u8>> = vec![vec![]];
        assert_eq!(OccupancyGrid::from_rows(&rows), Err(GridError::Empty));
    }

    #[test]
    fn any_non_zero_is_blocked() {
        let g = OccupancyGrid::from_rows(&[[0u8, 7, 255]]).unwrap();
        assert!(g.is_free(Position::new(0, 0)));
        assert!(g.is_blocked(Position::new(0, 1)));
        assert!(g.is_blocked(Position::new(0, 2)));
        assert_eq!(g.count_blocked(), 2);
    }

    #[test]
    fn out_of_bounds_is_neither_free_nor_blocked() {
        let g = OccupancyGrid::new(2, 2);
        let p = Position::new(0, 2);
        assert!(!g.is_free(p));
        assert!(!g.is_blocked(p));
    }

    #[test]
    fn from_fn_and_with_blocked() {
        let g = OccupancyGrid::from_fn(3, 3, |p| u8::from(p.row == p.col));
        assert_eq!(g.count_blocked(), 3);
        let h = g.with_blocked([Position::new(0, 1), Position::new(9, 9)]);
        assert_eq!(h.count_blocked(), 4);
        // `g` itself is unchanged.
        assert_eq!(g.count_blocked(), 3);
    }

    #[test]
    fn display_renders_text_map() {
        let g = OccupancyGrid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        assert_eq!(g.to_string(), ".#\n#.");
    }

    #[test]
    fn iter_pairs_positions_with_values() {
        let g = OccupancyGrid::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (Position::new(0, 1), 1));
        assert_eq!(items[2], (Position::new(1, 0), 0));
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OccupancyGrid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g = OccupancyGrid::from_rows(&[[0u8, 1, 0], [1, 0, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,1,0],[1,0,0]]");
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_rows_fail_to_deserialize() {
        let res: Result<OccupancyGrid, _> = serde_json::from_str("[[0,1],[0]]");
        assert!(res.is_err());
    }
}

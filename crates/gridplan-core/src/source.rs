//! Grid sources: where occupancy grids come from.
//!
//! The planner only ever reads an [`OccupancyGrid`]. How that grid is produced
//! (a file, a sensor pipeline, a generator) is behind the [`GridSource`] trait.
//! [`TextMap`] is the built-in source for ASCII maps.

use crate::geom::Position;
use crate::grid::{BLOCKED, FREE, GridError, OccupancyGrid};

/// Anything that can yield an occupancy grid.
pub trait GridSource {
    /// Error produced when the grid cannot be loaded.
    type Error;

    /// Produce the grid.
    fn load(&self) -> Result<OccupancyGrid, Self::Error>;
}

impl GridSource for OccupancyGrid {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<OccupancyGrid, Self::Error> {
        Ok(self.clone())
    }
}

/// An occupancy grid described as ASCII art.
///
/// Each line is one row. `.` and `0` are free cells; `#`, `X` and `1` are
/// blocked. All lines must have the same width. Trailing newlines and `\r`
/// line endings are ignored.
///
/// ```
/// use gridplan_core::{GridSource, Position, TextMap};
///
/// let grid = TextMap::new("..#\n.#.\n...").load().unwrap();
/// assert!(grid.is_blocked(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextMap<'a> {
    text: &'a str,
}

impl<'a> TextMap<'a> {
    /// Wrap a text map. Nothing is parsed until [`load`](GridSource::load).
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Return the raw text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    fn cell(ch: char) -> Option<u8> {
        match ch {
            '.' | '0' => Some(FREE),
            '#' | 'X' | '1' => Some(BLOCKED),
            _ => None,
        }
    }
}

impl GridSource for TextMap<'_> {
    type Error = GridError;

    fn load(&self) -> Result<OccupancyGrid, GridError> {
        let text = self.text.trim_end_matches(['\n', '\r']);
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (r, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let Some(v) = Self::cell(ch) else {
                    return Err(GridError::InvalidCell {
                        ch,
                        pos: Position::new(r as i32, c as i32),
                    });
                };
                row.push(v);
            }
            rows.push(row);
        }
        OccupancyGrid::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#...#
#.#.#
#...#
#####
";

    #[test]
    fn parse_room() {
        let g = TextMap::new(ROOM).load().unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 5);
        assert!(g.is_blocked(Position::new(0, 0)));
        assert!(g.is_free(Position::new(1, 1)));
        assert!(g.is_blocked(Position::new(2, 2)));
        assert_eq!(g.count_blocked(), 17);
    }

    #[test]
    fn digits_and_crlf() {
        let g = TextMap::new("010\r\n001\r\n").load().unwrap();
        assert_eq!(g.rows(), 2);
        assert!(g.is_blocked(Position::new(0, 1)));
        assert!(g.is_blocked(Position::new(1, 2)));
        assert!(g.is_free(Position::new(1, 0)));
    }

    #[test]
    fn display_round_trips_through_text() {
        let g = TextMap::new(ROOM).load().unwrap();
        let again = TextMap::new(&g.to_string()).load().unwrap();
        assert_eq!(g, again);
    }

    #[test]
    fn invalid_cell_reports_position() {
        let err = TextMap::new("...\n.?.").load().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                ch: '?',
                pos: Position::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn ragged_lines_rejected() {
        let err = TextMap::new("...\n..\n...").load().unwrap_err();
        assert!(matches!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn empty_text_rejected() {
        assert_eq!(TextMap::new("").load(), Err(GridError::Empty));
        assert_eq!(TextMap::new("\n\n").load(), Err(GridError::Empty));
    }

    #[test]
    fn occupancy_grid_is_its_own_source() {
        let g = OccupancyGrid::new(2, 2);
        let Ok(loaded) = g.load();
        assert_eq!(loaded, g);
    }
}

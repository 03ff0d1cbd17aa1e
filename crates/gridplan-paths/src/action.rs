//! The action model: the eight elementary moves on an 8-connected grid.

use std::f64::consts::SQRT_2;
use std::fmt;

use gridplan_core::{OccupancyGrid, Position};

/// One elementary move. Down is `+row`, Right is `+col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

/// Displacement and traversal cost of one action.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Move {
    dr: i32,
    dc: i32,
    cost: f64,
}

// Indexed by `Action as usize`.
const MOVES: [Move; 8] = [
    Move { dr: -1, dc: 0, cost: 1.0 },
    Move { dr: -1, dc: 1, cost: SQRT_2 },
    Move { dr: 0, dc: 1, cost: 1.0 },
    Move { dr: 1, dc: 1, cost: SQRT_2 },
    Move { dr: 1, dc: 0, cost: 1.0 },
    Move { dr: 1, dc: -1, cost: SQRT_2 },
    Move { dr: 0, dc: -1, cost: 1.0 },
    Move { dr: -1, dc: -1, cost: SQRT_2 },
];

impl Action {
    /// Every action, clockwise from [`Up`](Action::Up).
    pub const ALL: [Action; 8] = [
        Action::Up,
        Action::UpRight,
        Action::Right,
        Action::DownRight,
        Action::Down,
        Action::DownLeft,
        Action::Left,
        Action::UpLeft,
    ];

    #[inline]
    fn entry(self) -> Move {
        MOVES[self as usize]
    }

    /// Traversal cost: `1` for axis-aligned moves, `√2` for diagonals.
    #[inline]
    pub fn cost(self) -> f64 {
        self.entry().cost
    }

    /// Displacement `(dr, dc)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        let m = self.entry();
        (m.dr, m.dc)
    }

    /// Whether this is one of the four diagonal moves.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Action::UpRight | Action::DownRight | Action::DownLeft | Action::UpLeft
        )
    }

    /// The position reached by taking this action from `p`.
    #[inline]
    pub fn apply(self, p: Position) -> Position {
        let (dr, dc) = self.delta();
        p.offset(dr, dc)
    }

    /// The action with displacement `(dr, dc)`, if any.
    pub fn from_delta(dr: i32, dc: i32) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.delta() == (dr, dc))
    }

    /// The action that moves from `from` to the adjacent cell `to`.
    pub fn between(from: Position, to: Position) -> Option<Action> {
        let d = to - from;
        Action::from_delta(d.row, d.col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Action::Up => '↑',
            Action::UpRight => '↗',
            Action::Right => '→',
            Action::DownRight => '↘',
            Action::Down => '↓',
            Action::DownLeft => '↙',
            Action::Left => '←',
            Action::UpLeft => '↖',
        };
        write!(f, "{glyph}")
    }
}

/// Actions that can be taken from `p` on `grid`.
///
/// An action survives when its target cell lies inside the grid and is free.
/// The result keeps the order of [`Action::ALL`].
pub fn valid_actions(grid: &OccupancyGrid, p: Position) -> Vec<Action> {
    let mut buf = Vec::with_capacity(8);
    valid_actions_into(grid, p, &mut buf);
    buf
}

/// Like [`valid_actions`], but appends into `buf`. The caller clears `buf`
/// before calling.
pub(crate) fn valid_actions_into(grid: &OccupancyGrid, p: Position, buf: &mut Vec<Action>) {
    buf.extend(
        Action::ALL
            .into_iter()
            .filter(|a| grid.is_free(a.apply(p))),
    );
}

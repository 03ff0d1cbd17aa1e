//! Best-first path planning on occupancy grids.
//!
//! This crate implements A* search over an 8-connected
//! [`OccupancyGrid`](gridplan_core::OccupancyGrid):
//!
//! - **Action model**: the eight elementary moves ([`Action`]), their costs
//!   (`1` axis-aligned, `√2` diagonal) and the [`valid_actions`] filter.
//! - **Search engine**: [`Planner::search`] and the convenience functions
//!   [`search`] and [`a_star`].
//! - **Heuristics**: the [`Heuristic`] trait plus stock distances in
//!   [`heuristic`].
//!
//! By default a node's branch record is fixed the first time the node is
//! discovered ([`Relaxation::FirstDiscovery`]). [`Relaxation::Reopen`]
//! selects classical A* with re-relaxation.
//!
//! ```
//! use gridplan_core::{GridSource, Position, TextMap};
//! use gridplan_paths::{a_star, heuristic};
//!
//! let grid = TextMap::new("...\n.#.\n...").load().unwrap();
//! let (path, cost) = a_star(&grid, &heuristic::octile, Position::new(0, 0), Position::new(2, 2));
//! assert_eq!(path.len(), 4);
//! assert!((cost - (2.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
//! ```

mod action;
mod astar;
mod config;
mod error;
pub mod heuristic;
mod plan;

pub use action::{Action, valid_actions};
pub use astar::{Planner, a_star, search};
pub use config::{Relaxation, SearchConfig};
pub use error::SearchError;
pub use heuristic::Heuristic;
pub use plan::Plan;

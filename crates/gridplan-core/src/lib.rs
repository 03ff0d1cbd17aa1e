//! **gridplan-core** — geometry and map types for occupancy-grid planning.
//!
//! This crate provides the read-only world model that the planners in
//! `gridplan-paths` operate on: cell [`Position`]s, grid [`Bounds`], the
//! [`OccupancyGrid`] itself, and the [`GridSource`] seam through which grids
//! are loaded.

pub mod geom;
pub mod grid;
pub mod source;

pub use geom::{Bounds, BoundsIter, Position};
pub use grid::{BLOCKED, FREE, GridError, OccupancyGrid};
pub use source::{GridSource, TextMap};

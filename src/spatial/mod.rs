//! Spatial layout of mosaic cells
//!
//! This module contains the grid planner: cell geometry derived from font
//! metrics and the column/row origins covering the source canvas.

/// Cell geometry and grid coordinate planning
pub mod grid;

pub use grid::{CellGeometry, Grid};

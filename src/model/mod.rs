//! Data model for grid search
//!
//! Contains the coordinate, map, and waypoint types the search
//! frontier is built on.

// Re-export of main modules
pub mod grid;
pub mod waypoint;

// Re-export of basic types for convenience
pub use grid::{GridCell, GridMap};
pub use waypoint::Waypoint;

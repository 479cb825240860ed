pub use crate::Cost;
pub use crate::error::Error;

// Re-export key components
pub use crate::model::{GridCell, GridMap, Waypoint};
pub use crate::search::Frontier;
